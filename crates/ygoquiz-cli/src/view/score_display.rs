use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, BlockExt as _, Widget},
};
use ygoquiz_engine::ScoreBoard;

use super::style;

#[derive(Debug)]
pub(crate) struct ScoreDisplay<'a> {
    score: &'a ScoreBoard,
    block: Option<Block<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub(crate) fn new(score: &'a ScoreBoard) -> Self {
        Self { score, block: None }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn line(&self) -> Line<'static> {
        let score = self.score;
        let field = |label: &'static str, value: u32| {
            [
                Span::styled(label, style::LABEL),
                Span::styled(value.to_string(), style::HEADING),
                Span::raw("  "),
            ]
        };
        Line::from_iter(
            [
                field("Score: ", score.score()),
                field("Best: ", score.best()),
                field("Correct: ", score.correct()),
                field("Wrong: ", score.incorrect()),
                field("Ties: ", score.ties()),
            ]
            .into_iter()
            .flatten(),
        )
    }
}

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        self.line().render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use ygoquiz_engine::Outcome;

    use super::*;

    #[test]
    fn test_score_line() {
        let mut board = ScoreBoard::new();
        board.record(&Outcome::Correct {
            answer: "Jinzo".into(),
        });
        let line = ScoreDisplay::new(&board).line().to_string();
        assert!(line.starts_with("Score: 1  Best: 1  Correct: 1  Wrong: 0"));
    }
}
