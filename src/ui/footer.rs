use crate::ui::card::CardFocus;
use crate::ui::theme::FOOTER_TEXT;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const HINTS: &str = " Tab: Next │ Enter: Activate │ f: Favorite │ q: Quit";

pub struct Footer {
    focus: CardFocus,
}

impl Footer {
    pub fn new(focus: CardFocus) -> Self {
        Self { focus }
    }

    /// Key hints on the left, the focused control's label on the right.
    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let focus = format!("Focus: {} ", self.focus.label());

        // Pad by char count, not byte count (box-drawing separators).
        let padding = usize::from(area.width)
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(focus.chars().count());

        let style = Style::default().fg(FOOTER_TEXT).add_modifier(Modifier::DIM);
        Paragraph::new(Line::from(vec![
            Span::styled(HINTS, style),
            Span::styled(" ".repeat(padding), style),
            Span::styled(focus, style.remove_modifier(Modifier::DIM)),
        ]))
    }
}
