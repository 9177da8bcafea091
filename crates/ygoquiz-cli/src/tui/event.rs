use crossterm::event::KeyEvent;

#[derive(Debug, Clone, derive_more::IsVariant)]
pub(super) enum TuiEvent {
    Tick,
    Render,
    /// Key press (repeats and releases are dropped).
    Key(KeyEvent),
}
