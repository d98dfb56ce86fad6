use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{QueryState, provider::WeatherProvider};

/// Drives the screen's state machine: one `submit` per user query, the
/// outcome observed through the published [`QueryState`] slot.
///
/// The slot is a watch channel: the latest published value wins and every
/// active observer sees the same value. There is no request identity and no
/// cancellation, so overlapping submits race and whichever response arrives
/// last is the one observers end up seeing.
#[derive(Debug, Clone)]
pub struct WeatherController {
    provider: Arc<dyn WeatherProvider>,
    state: watch::Sender<QueryState>,
}

impl WeatherController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        let (state, _) = watch::channel(QueryState::Idle);
        Self { provider, state }
    }

    /// Observe the published state.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.subscribe()
    }

    /// Clone of the latest published value.
    pub fn current(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// Start one lookup for `location`.
    ///
    /// `Loading` is published before the request task is spawned, so
    /// observers never see a stale result while the lookup is in flight.
    /// Callers must not pass an empty location; the screen rejects those
    /// before they get here.
    pub fn submit(&self, location: &str) {
        info!(%location, "weather lookup submitted");
        self.state.send_replace(QueryState::Loading);

        let provider = Arc::clone(&self.provider);
        let state = self.state.clone();
        let location = location.to_owned();
        tokio::spawn(async move {
            let next = match provider.current_weather(&location).await {
                Ok(snapshot) => QueryState::Success(snapshot),
                Err(err) => {
                    warn!(%location, error = %err, "weather lookup failed");
                    QueryState::Error(err.to_string())
                }
            };
            state.send_replace(next);
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::{FetchError, WeatherSnapshot};

    fn snapshot(location: &str) -> WeatherSnapshot {
        WeatherSnapshot {
            location: location.to_string(),
            country: "UK".to_string(),
            localtime: "2024-01-01 12:00".to_string(),
            temp_c: 10.0,
            condition: "Cloudy".to_string(),
            icon_url: "https://x/128x128/cloud.png".to_string(),
            humidity: 80.0,
            wind_kph: 15.0,
            uv: 2.0,
            precip_mm: 0.0,
        }
    }

    /// Never completes; pins the state machine in `Loading`.
    #[derive(Debug)]
    struct NeverCompletes;

    #[async_trait]
    impl WeatherProvider for NeverCompletes {
        async fn current_weather(&self, _: &str) -> Result<WeatherSnapshot, FetchError> {
            std::future::pending().await
        }
    }

    /// Resolves every lookup with a snapshot named after the location.
    #[derive(Debug)]
    struct Echoes;

    #[async_trait]
    impl WeatherProvider for Echoes {
        async fn current_weather(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
            Ok(snapshot(location))
        }
    }

    /// Fails every lookup with the error built by the stored constructor.
    #[derive(Debug)]
    struct Fails(fn() -> FetchError);

    #[async_trait]
    impl WeatherProvider for Fails {
        async fn current_weather(&self, _: &str) -> Result<WeatherSnapshot, FetchError> {
            Err((self.0)())
        }
    }

    /// Completes each lookup only when the test releases its per-location
    /// gate, so completion order is under test control.
    #[derive(Debug, Default)]
    struct Gated {
        gates: Mutex<HashMap<String, oneshot::Receiver<Result<WeatherSnapshot, FetchError>>>>,
    }

    impl Gated {
        fn gate(&self, location: &str) -> oneshot::Sender<Result<WeatherSnapshot, FetchError>> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(location.to_string(), rx);
            tx
        }
    }

    #[async_trait]
    impl WeatherProvider for Gated {
        async fn current_weather(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
            let gate = self.gates.lock().unwrap().remove(location).expect("gate registered");
            gate.await.expect("gate released")
        }
    }

    async fn wait_for(rx: &mut watch::Receiver<QueryState>, pred: fn(&QueryState) -> bool) {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                if pred(&rx.borrow_and_update()) {
                    return;
                }
                rx.changed().await.expect("controller alive");
            }
        })
        .await
        .expect("state did not arrive in time");
    }

    #[tokio::test]
    async fn loading_is_published_synchronously() {
        let controller = WeatherController::new(Arc::new(NeverCompletes));
        assert_eq!(controller.current(), QueryState::Idle);

        // No await between submit and the assertion: the transition must not
        // depend on the request task running.
        controller.submit("London");
        assert_eq!(controller.current(), QueryState::Loading);
    }

    #[tokio::test]
    async fn successful_lookup_publishes_snapshot_to_all_observers() {
        let controller = WeatherController::new(Arc::new(Echoes));
        let mut rx_a = controller.subscribe();
        let mut rx_b = controller.subscribe();

        controller.submit("London");
        wait_for(&mut rx_a, |s| matches!(s, QueryState::Success(_))).await;

        let QueryState::Success(snap) = controller.current() else {
            panic!("expected success");
        };
        assert_eq!(snap.location, "London");

        // Every observer sees the same published value.
        wait_for(&mut rx_b, |s| matches!(s, QueryState::Success(_))).await;
        assert_eq!(*rx_a.borrow(), *rx_b.borrow());
    }

    #[tokio::test]
    async fn each_failure_kind_publishes_a_message() {
        let failures: [fn() -> FetchError; 3] = [
            || FetchError::Network("connection refused".to_string()),
            || FetchError::Api("status 500 Internal Server Error: boom".to_string()),
            || FetchError::InvalidResponse("expected value at line 1".to_string()),
        ];

        for make in failures {
            let controller = WeatherController::new(Arc::new(Fails(make)));
            let mut rx = controller.subscribe();

            controller.submit("London");
            wait_for(&mut rx, |s| matches!(s, QueryState::Error(_))).await;

            let QueryState::Error(msg) = controller.current() else {
                panic!("expected error");
            };
            assert!(!msg.is_empty());
        }
    }

    #[tokio::test]
    async fn failure_discards_the_previous_snapshot() {
        let gated = Arc::new(Gated::default());
        let controller = WeatherController::new(gated.clone());
        let mut rx = controller.subscribe();

        let london = gated.gate("London");
        controller.submit("London");
        london.send(Ok(snapshot("London"))).unwrap();
        wait_for(&mut rx, |s| matches!(s, QueryState::Success(_))).await;

        let nowhere = gated.gate("Nowhere123");
        controller.submit("Nowhere123");
        // The stale snapshot is already gone while the lookup is in flight.
        assert_eq!(controller.current(), QueryState::Loading);

        nowhere
            .send(Err(FetchError::Api("status 404 Not Found: no matching location".to_string())))
            .unwrap();
        wait_for(&mut rx, |s| matches!(s, QueryState::Error(_))).await;

        let QueryState::Error(msg) = controller.current() else {
            panic!("expected error");
        };
        assert!(!msg.is_empty());
    }

    // Overlapping submits have no request identity: the last response to
    // arrive is the one observed. This pins the current behavior; it is not
    // an ordering guarantee.
    #[tokio::test]
    async fn overlapping_submits_last_arrival_wins() {
        let gated = Arc::new(Gated::default());
        let controller = WeatherController::new(gated.clone());
        let mut rx = controller.subscribe();

        let paris = gated.gate("Paris");
        let rome = gated.gate("Rome");

        controller.submit("Paris");
        controller.submit("Rome");
        assert_eq!(controller.current(), QueryState::Loading);

        // Rome answers first, Paris later.
        rome.send(Ok(snapshot("Rome"))).unwrap();
        wait_for(&mut rx, |s| matches!(s, QueryState::Success(_))).await;

        paris.send(Ok(snapshot("Paris"))).unwrap();
        wait_for(&mut rx, |s| {
            matches!(s, QueryState::Success(snap) if snap.location == "Paris")
        })
        .await;

        let QueryState::Success(snap) = controller.current() else {
            panic!("expected success");
        };
        assert_eq!(snap.location, "Paris");
    }
}
