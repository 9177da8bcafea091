use ratatui::style::{Color, Modifier, Style};
use ygoquiz_engine::Tone;

pub(crate) const LABEL: Style = Style::new().fg(Color::Cyan);
pub(crate) const DIM: Style = Style::new().fg(Color::DarkGray);
pub(crate) const HIGHLIGHT: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
pub(crate) const HEADING: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) fn tone(tone: Tone) -> Style {
    let color = match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Neutral => Color::Yellow,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}
