use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, BlockExt as _, Paragraph, Widget},
};
use ygoquiz_engine::GameMode;

use super::style;

/// Numbered list of all game modes with the cursor row highlighted.
#[derive(Debug)]
pub(crate) struct ModeMenu<'a> {
    cursor: usize,
    block: Option<Block<'a>>,
}

impl<'a> ModeMenu<'a> {
    pub(crate) fn new(cursor: usize) -> Self {
        Self {
            cursor,
            block: None,
        }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled("Choose a game mode", style::HEADING),
            Line::default(),
        ];
        for (i, mode) in GameMode::ALL.into_iter().enumerate() {
            let title = format!(" {}. {mode} ", i + 1);
            let title = if i == self.cursor {
                Span::styled(title, style::HIGHLIGHT)
            } else {
                Span::styled(title, style::HEADING)
            };
            lines.push(Line::from(vec![
                title,
                Span::styled(format!(" {}", mode.summary()), style::DIM),
            ]));
        }
        lines
    }
}

impl Widget for ModeMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        Paragraph::new(self.lines()).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_every_mode() {
        let lines = ModeMenu::new(0).lines();
        assert_eq!(lines.len(), GameMode::ALL.len() + 2);
        assert!(lines[2].to_string().contains("1. Guess the Card"));
        assert!(lines[7].to_string().contains("6. Which Card Is Older?"));
    }
}
