use crate::ui::app::App;
use crate::ui::card::ProductCard;
use crate::ui::footer::Footer;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Draws the page: background, the centred card and the footer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);

    let page = app.page();
    if let Ok(background) = page.background_color() {
        frame.render_widget(Block::new().style(Style::default().bg(background)), body);
    }

    let card = ProductCard::new(app.product(), app.card())
        .thumbnail(app.thumbnail())
        .show_focus(true);
    let width = page.card_width();
    let card_area = centered_rect_by_size(width, card.height(width), page.margin, body);
    frame.render_widget(card, card_area);

    frame.render_widget(Footer::new(app.card().focus()).widget(footer), footer);
}
