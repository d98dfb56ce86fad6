use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use skywatch_core::{QueryState, WeatherController};
use tokio::sync::watch;

/// Everything the screen needs to render besides the published state: the
/// search field and a transient validation notice.
pub struct App {
    controller: WeatherController,
    state_rx: watch::Receiver<QueryState>,

    /// Search field contents.
    pub input: String,
    /// Byte offset of the cursor within `input`, always on a char boundary.
    pub input_cursor: usize,

    /// Shown when the user submits an empty search field.
    pub notice: Option<String>,

    pub spinner_frame: usize,
    last_spinner_update: Instant,
}

impl App {
    pub fn new(controller: WeatherController, default_location: Option<String>) -> Self {
        let state_rx = controller.subscribe();
        let input = default_location.unwrap_or_default();
        let input_cursor = input.len();
        Self {
            controller,
            state_rx,
            input,
            input_cursor,
            notice: None,
            spinner_frame: 0,
            last_spinner_update: Instant::now(),
        }
    }

    /// Latest published state.
    pub fn query_state(&self) -> QueryState {
        self.state_rx.borrow().clone()
    }

    /// Handle a key event. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                if let Some((idx, _)) = self.input[..self.input_cursor].char_indices().next_back() {
                    self.input.remove(idx);
                    self.input_cursor = idx;
                }
            }
            KeyCode::Left => {
                if let Some((idx, _)) = self.input[..self.input_cursor].char_indices().next_back() {
                    self.input_cursor = idx;
                }
            }
            KeyCode::Right => {
                if let Some(c) = self.input[self.input_cursor..].chars().next() {
                    self.input_cursor += c.len_utf8();
                }
            }
            KeyCode::Char(c) => {
                self.input.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
        false
    }

    /// Submit the current search field.
    ///
    /// Empty input never reaches the controller: it only raises the notice.
    fn submit(&mut self) {
        let location = self.input.trim();
        if location.is_empty() {
            self.notice = Some("Please enter a city".to_string());
            return;
        }
        self.notice = None;
        self.controller.submit(location);
    }

    /// Advance animations.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_spinner_update) > Duration::from_millis(150) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.last_spinner_update = now;
        }
    }
}
