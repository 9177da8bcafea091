use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block, BlockExt as _, Paragraph, Widget, Wrap},
};

use super::style;

/// Alternative keys and what they do.
pub(crate) type KeyBinding<'a> = (&'a [&'a str], &'a str);

/// Footer line listing the keys of the current view.
#[derive(Debug)]
pub(crate) struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
    block: Option<Block<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub(crate) fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self {
            bindings,
            block: None,
        }
    }

    pub(crate) fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", style::DIM));
            }
            spans.push(Span::styled(keys.join("/"), style::LABEL));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(desc));
        }
        Line::from(spans).centered()
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let inner = self.block.inner_if_some(area);
        Paragraph::new(self.line())
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_joined() {
        let bindings: &[KeyBinding] = &[(&["n", "Enter"], "Next"), (&["Esc"], "Menu")];
        let line = KeyBindingDisplay::new(bindings).line();
        assert_eq!(line.to_string(), "n/Enter Next  Esc Menu");
    }
}
