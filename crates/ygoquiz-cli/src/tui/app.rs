use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Application driven by [`Runtime::run`](super::Runtime::run).
pub(crate) trait App {
    fn should_exit(&self) -> bool;

    /// Handles a key press. The screen is redrawn afterwards.
    fn handle_key(&mut self, key: KeyEvent);

    fn draw(&self, frame: &mut Frame);

    /// Called on each tick. Returns `true` if the screen needs redrawing.
    fn update(&mut self) -> bool;
}
