use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, BlockExt as _, Paragraph, Widget, Wrap},
};
use ygoquiz_engine::{Card, Challenge, Feedback, Media, Round};

use super::style;

/// Prompt, card details, media links and the answer area of one round.
///
/// The terminal cannot show pictures, so media is listed as URLs.
#[derive(Debug)]
pub(crate) struct RoundDisplay<'a> {
    round: &'a Round,
    input: Option<&'a str>,
    cursor: usize,
    feedback: Option<&'a Feedback>,
    block: Option<Block<'a>>,
}

impl<'a> RoundDisplay<'a> {
    pub(crate) fn new(round: &'a Round) -> Self {
        Self {
            round,
            input: None,
            cursor: 0,
            feedback: None,
            block: None,
        }
    }

    /// Text typed so far, shown while a free-text round is open.
    pub(crate) fn input(self, input: &'a str) -> Self {
        Self {
            input: Some(input),
            ..self
        }
    }

    pub(crate) fn cursor(self, cursor: usize) -> Self {
        Self { cursor, ..self }
    }

    /// Marks the round as answered.
    pub(crate) fn feedback(self, feedback: &'a Feedback) -> Self {
        Self {
            feedback: Some(feedback),
            ..self
        }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let prompt = self.round.prompt();
        let mut lines = vec![Line::styled(prompt.text.as_str(), style::HEADING), Line::default()];

        for detail in &prompt.details {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", detail.label), style::LABEL),
                Span::raw(detail.value.as_str()),
            ]));
        }

        let media = match self.round.media() {
            Media::None => vec![],
            Media::CardImage(url) => vec![("Image", url)],
            Media::Artwork(url) => vec![("Artwork", url)],
            Media::Pair { left, right } => vec![("Left", left), ("Right", right)],
        };
        for (label, url) in media {
            lines.push(Line::from(vec![
                Span::styled(format!("{label}: "), style::LABEL),
                Span::styled(url.as_str(), style::DIM),
            ]));
        }
        lines.push(Line::default());

        match self.round.challenge() {
            Challenge::FreeText { .. } => {
                if self.feedback.is_none() {
                    let input = self.input.unwrap_or_default();
                    lines.push(Line::from(vec![
                        Span::styled("> ", style::LABEL),
                        Span::raw(input),
                        Span::styled("_", style::DIM),
                    ]));
                }
            }
            Challenge::MultipleChoice { options } => {
                for (i, option) in options.options().iter().enumerate() {
                    let text = format!(" {}. {option} ", i + 1);
                    let span = match self.feedback {
                        Some(_) if i == options.correct_index() => {
                            Span::styled(text, style::HEADING)
                        }
                        Some(_) => Span::styled(text, style::DIM),
                        None if i == self.cursor => Span::styled(text, style::HIGHLIGHT),
                        None => Span::raw(text),
                    };
                    lines.push(Line::from(span));
                }
            }
            Challenge::PickOlder => {
                for (label, card) in ["Left", "Right"].into_iter().zip(self.round.cards()) {
                    lines.push(self.pick_line(label, card));
                }
            }
        }

        if let Some(feedback) = self.feedback {
            lines.push(Line::default());
            lines.push(Line::styled(
                feedback.message.as_str(),
                style::tone(feedback.tone),
            ));
        }
        lines
    }

    fn pick_line(&self, label: &'static str, card: &'a Card) -> Line<'a> {
        let mut spans = vec![
            Span::styled(format!("{label}: "), style::LABEL),
            Span::styled(card.name.as_str(), style::HEADING),
        ];
        // Dates are revealed once the pick is made.
        if self.feedback.is_some() {
            let released = card
                .release_date()
                .map_or_else(|| "unknown".to_owned(), |date| date.to_string());
            spans.push(Span::styled(format!("  (released {released})"), style::DIM));
        }
        Line::from(spans)
    }
}

impl Widget for RoundDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;
    use ygoquiz_engine::{CardId, CardImage, CardSet, Tone, setup};

    use super::*;

    fn card(id: u64, name: &str) -> Card {
        Card {
            images: vec![CardImage {
                image_url: format!("https://img/{id}.jpg"),
                image_url_cropped: format!("https://img/cropped/{id}.jpg"),
            }],
            sets: vec![CardSet::new(format!("{name} Pack"))],
            ..Card::new(CardId::new(id), name)
        }
    }

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_free_text_shows_input_until_answered() {
        let round = setup::guess_the_card(card(1, "Jinzo")).unwrap();
        let lines = text(&RoundDisplay::new(&round).input("jin").lines());
        assert!(lines.contains(&"Image: https://img/1.jpg".to_owned()));
        assert!(lines.contains(&"> jin_".to_owned()));

        let feedback = Feedback {
            tone: Tone::Positive,
            message: "Correct! It's Jinzo!".into(),
        };
        let lines = text(&RoundDisplay::new(&round).feedback(&feedback).lines());
        assert!(!lines.iter().any(|line| line.starts_with("> ")));
        assert_eq!(lines.last().unwrap(), "Correct! It's Jinzo!");
    }

    #[test]
    fn test_options_are_numbered() {
        let mut rng = Pcg32::seed_from_u64(1);
        let distractors = [card(2, "B"), card(3, "C"), card(4, "D")];
        let round = setup::guess_the_art(card(1, "A"), &distractors, &mut rng).unwrap();
        let lines = text(&RoundDisplay::new(&round).lines());
        for n in 1..=4 {
            assert!(lines.iter().any(|line| line.starts_with(&format!(" {n}. "))));
        }
    }
}
