//! Card rendering.
//!
//! The card is a fixed-width column of regions: badges, media, compare/share
//! actions, stock status, product info, pricing, quantity/unit selector and
//! the add-to-cart button. Rendering reads the payload and the card state and
//! never mutates either, so the same inputs always produce the same buffer.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::asset::Thumbnail;
use crate::catalog::{format_price, ProductDisplay};
use crate::ui::card::state::{CardFocus, CardState};
use crate::ui::theme::{
    ACCENT_ORANGE, ACTION_BLUE, ACTION_TEXT, CARD_BACKGROUND, CARD_BORDER, CONTROL_BACKGROUND,
    DIVIDER, STATUS_OK, TEXT_FAINT, TEXT_MUTED, TEXT_STRONG, TEXT_VALUE,
};

/// Rows reserved for the product image.
pub const MEDIA_HEIGHT: u16 = 8;

/// Border plus one column of padding on each side.
const CARD_CHROME: u16 = 4;

/// Width of the quantity box, brackets included.
const QUANTITY_BOX_WIDTH: usize = 8;

/// Columns available inside a card `card_width` wide.
pub fn media_width(card_width: u16) -> u16 {
    card_width.saturating_sub(CARD_CHROME)
}

/// The product card widget.
pub struct ProductCard<'a> {
    product: &'a ProductDisplay,
    state: &'a CardState,
    thumbnail: Option<&'a Thumbnail>,
    show_focus: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a ProductDisplay, state: &'a CardState) -> Self {
        Self {
            product,
            state,
            thumbnail: None,
            show_focus: false,
        }
    }

    pub fn thumbnail(mut self, thumbnail: Option<&'a Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// Highlights the focused control.
    pub fn show_focus(mut self, show: bool) -> Self {
        self.show_focus = show;
        self
    }

    /// Rows the card needs when rendered `width` columns wide.
    pub fn height(&self, width: u16) -> u16 {
        let body = self.body_lines(media_width(width)).len() as u16;
        2 + 1 + MEDIA_HEIGHT + 1 + body
    }

    fn control_style(&self, control: CardFocus, base: Style) -> Style {
        if self.show_focus && self.state.focus() == control {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    fn badge_line(&self, width: u16) -> Line<'static> {
        let badge = Span::styled(
            format!(" -{}% ", self.product.discount),
            Style::default()
                .fg(ACTION_TEXT)
                .bg(ACCENT_ORANGE)
                .add_modifier(Modifier::BOLD),
        );
        let (glyph, color) = if self.state.is_favorite() {
            ("★", ACCENT_ORANGE)
        } else {
            ("☆", TEXT_MUTED)
        };
        let favorite = Span::styled(
            format!(" {glyph} "),
            self.control_style(
                CardFocus::Favorite,
                Style::default().fg(color).bg(CONTROL_BACKGROUND),
            ),
        );

        let gap = usize::from(width).saturating_sub(badge.width() + favorite.width());
        Line::from(vec![badge, Span::raw(" ".repeat(gap)), favorite])
    }

    fn action_line(&self) -> Line<'static> {
        let base = Style::default().fg(TEXT_MUTED).bg(CONTROL_BACKGROUND);
        Line::from(vec![
            Span::styled(" ⇄ ", self.control_style(CardFocus::Compare, base)),
            Span::raw(" "),
            Span::styled(" ↗ ", self.control_style(CardFocus::Share, base)),
        ])
        .alignment(Alignment::Right)
    }

    fn body_lines(&self, width: u16) -> Vec<Line<'static>> {
        let product = self.product;
        let width = usize::from(width);
        let faint = Style::default().fg(TEXT_FAINT);
        let mut lines = Vec::new();

        if product.in_stock {
            let ok = Style::default().fg(STATUS_OK);
            lines.push(Line::from(vec![
                Span::styled("✔ ", ok),
                Span::styled("In stock", ok.add_modifier(Modifier::BOLD)),
            ]));
        }

        lines.push(Line::styled("─".repeat(width), Style::default().fg(DIVIDER)));
        lines.extend(flow(
            words(
                &format!("{} | Part No. {}", product.brand, product.part_number),
                faint,
            )
            .collect(),
            width,
            0,
        ));
        let title = Style::default().fg(TEXT_STRONG).add_modifier(Modifier::BOLD);
        lines.extend(flow(words(&product.title, title).collect(), width, 0));
        lines.push(Line::default());

        for spec in &product.specs {
            lines.extend(labelled_rows(&spec.label, &spec.value, width));
        }
        if let Some(guarantee) = product.guarantee() {
            lines.extend(labelled_rows("Guarantee", guarantee, width));
        }
        lines.push(Line::default());

        // The struck original price moves to its own row rather than clip.
        let struck = faint.add_modifier(Modifier::CROSSED_OUT);
        let offer = vec![
            Span::styled("your price ", Style::default().fg(ACCENT_ORANGE)),
            Span::styled(
                format_price(product.price),
                Style::default().fg(TEXT_STRONG).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" net", faint),
        ];
        let original = vec![
            Span::styled(format_price(product.original_price), struck),
            Span::styled(" net", struck),
        ];
        lines.extend(flow(vec![offer, original], width, 0));
        lines.push(Line::default());

        lines.push(self.selector_line(width));
        lines.push(self.cart_line(width));
        lines
    }

    fn selector_line(&self, width: usize) -> Line<'static> {
        let quantity = Span::styled(
            format!("[{:^inner$}]", self.state.quantity(), inner = QUANTITY_BOX_WIDTH - 2),
            self.control_style(
                CardFocus::Quantity,
                Style::default().fg(TEXT_STRONG).add_modifier(Modifier::BOLD),
            ),
        );

        let unit_width = width.saturating_sub(QUANTITY_BOX_WIDTH + 1);
        let label_width = unit_width.saturating_sub(4);
        let unit = Span::styled(
            format!("[ {:<label_width$}▾]", self.state.unit().label()),
            self.control_style(CardFocus::Unit, Style::default().fg(TEXT_MUTED)),
        );

        Line::from(vec![quantity, Span::raw(" "), unit])
    }

    fn cart_line(&self, width: usize) -> Line<'static> {
        Line::from(Span::styled(
            format!("{:^width$}", "Add to cart ▾"),
            self.control_style(
                CardFocus::AddToCart,
                Style::default()
                    .fg(ACTION_TEXT)
                    .bg(ACTION_BLUE)
                    .add_modifier(Modifier::BOLD),
            ),
        ))
    }

    fn render_media(&self, area: Rect, buf: &mut Buffer) {
        if let Some(thumbnail) = self.thumbnail {
            thumbnail.render(area, buf, CARD_BACKGROUND);
            return;
        }

        // Placeholder frame carrying the alt text.
        let top_pad = usize::from(area.height.saturating_sub(3) / 2);
        let mut lines = vec![Line::default(); top_pad];
        lines.push(Line::styled("[ image ]", Style::default().fg(TEXT_FAINT)));
        lines.push(Line::styled(
            self.product.title.clone(),
            Style::default().fg(TEXT_MUTED),
        ));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER))
            .style(Style::default().bg(CARD_BACKGROUND))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let [badge_area, media_area, action_area, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(MEDIA_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        self.badge_line(inner.width).render(badge_area, buf);
        self.render_media(media_area, buf);
        self.action_line().render(action_area, buf);
        Paragraph::new(self.body_lines(inner.width)).render(body_area, buf);
    }
}

/// Renders `card` off-screen and returns its rows as plain text.
pub fn render_to_text(card: ProductCard<'_>, width: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, card.height(width));
    let mut buf = Buffer::empty(area);
    card.render(area, &mut buf);
    buffer_rows(&buf)
}

/// Buffer contents row by row, trailing blanks trimmed.
pub fn buffer_rows(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

/// Spans that are never broken across rows unless wider than a whole row.
type Chunk = Vec<Span<'static>>;

fn chunk_width(chunk: &[Span<'static>]) -> usize {
    chunk.iter().map(Span::width).sum()
}

fn words(text: &str, style: Style) -> impl Iterator<Item = Chunk> + '_ {
    text.split_whitespace()
        .map(move |word| vec![Span::styled(word.to_string(), style)])
}

/// `Label: value`, with continuation rows aligned under the value.
fn labelled_rows(label: &str, value: &str, width: usize) -> Vec<Line<'static>> {
    let muted = Style::default().fg(TEXT_MUTED);
    let chunks = words(&format!("{label}:"), muted)
        .chain(words(value, Style::default().fg(TEXT_VALUE)))
        .collect();
    flow(chunks, width, label.chars().count() + 2)
}

/// Greedy wrap of `chunks` into rows of `width` columns, one space apart.
///
/// Continuation rows start with `indent` blanks, dropped when it would leave
/// less than half the row. A chunk wider than a row is split by characters,
/// so no text is ever clipped.
fn flow(chunks: Vec<Chunk>, width: usize, indent: usize) -> Vec<Line<'static>> {
    let indent = if indent * 2 > width { 0 } else { indent };
    let room = width.saturating_sub(indent).max(1);

    let mut rows = Vec::new();
    let mut row: Chunk = Vec::new();
    let mut used = 0;
    let mut empty = true;
    for chunk in chunks.into_iter().flat_map(|chunk| split_chunk(chunk, room)) {
        let chunk_len = chunk_width(&chunk);
        if !empty && used + 1 + chunk_len > width {
            rows.push(Line::from(std::mem::take(&mut row)));
            if indent > 0 {
                row.push(Span::raw(" ".repeat(indent)));
            }
            used = indent;
            empty = true;
        }
        if !empty {
            row.push(Span::raw(" "));
            used += 1;
        }
        used += chunk_len;
        row.extend(chunk);
        empty = false;
    }
    if !empty {
        rows.push(Line::from(row));
    }
    rows
}

/// Splits `chunk` into pieces at most `max` characters wide, keeping styles.
fn split_chunk(chunk: Chunk, max: usize) -> Vec<Chunk> {
    if chunk_width(&chunk) <= max {
        return vec![chunk];
    }

    let mut pieces = Vec::new();
    let mut piece: Chunk = Vec::new();
    let mut used = 0;
    for span in chunk {
        let mut text = String::new();
        for c in span.content.chars() {
            if used == max {
                if !text.is_empty() {
                    piece.push(Span::styled(std::mem::take(&mut text), span.style));
                }
                pieces.push(std::mem::take(&mut piece));
                used = 0;
            }
            text.push(c);
            used += 1;
        }
        if !text.is_empty() {
            piece.push(Span::styled(text, span.style));
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Spec;
    use rust_decimal::Decimal;

    const WIDTH: u16 = 40;

    fn text(product: &ProductDisplay) -> Vec<String> {
        let state = CardState::for_product(product);
        render_to_text(ProductCard::new(product, &state), WIDTH)
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(needle))
    }

    #[test]
    fn guarantee_row_follows_payload() {
        let mut product = ProductDisplay::demo();
        assert!(row_of(&text(&product), "Guarantee: 5 years").is_some());

        product.guarantee = None;
        assert!(row_of(&text(&product), "Guarantee").is_none());
    }

    #[test]
    fn stock_indicator_follows_payload() {
        let mut product = ProductDisplay::demo();
        assert!(row_of(&text(&product), "In stock").is_some());

        product.in_stock = false;
        assert!(row_of(&text(&product), "In stock").is_none());
    }

    #[test]
    fn specs_render_in_order() {
        let mut product = ProductDisplay::demo();
        product.specs = vec![Spec::new("Material", "brass"), Spec::new("Color", "chrome")];
        let rows = text(&product);
        let material = row_of(&rows, "Material: brass").unwrap();
        let color = row_of(&rows, "Color: chrome").unwrap();
        assert!(material < color);
    }

    #[test]
    fn prices_use_two_decimals() {
        let mut product = ProductDisplay::demo();
        product.price = Decimal::new(45, 0);
        product.original_price = Decimal::new(55, 0);
        let rows = text(&product);
        let row = row_of(&rows, "your price").unwrap();
        assert!(rows[row].contains("$45.00"));
        assert!(rows[row].contains("$55.00"));
    }

    #[test]
    fn badge_shows_supplied_discount() {
        let mut product = ProductDisplay::demo();
        product.discount = 77;
        assert!(row_of(&text(&product), "-77%").is_some());
    }

    #[test]
    fn missing_image_shows_alt_text() {
        let rows = text(&ProductDisplay::demo());
        assert!(row_of(&rows, "[ image ]").is_some());
    }

    #[test]
    fn height_matches_rendered_rows() {
        let product = ProductDisplay::demo();
        let state = CardState::for_product(&product);
        let card = ProductCard::new(&product, &state);
        let height = card.height(WIDTH);
        let rows = render_to_text(card, WIDTH);
        assert_eq!(rows.len(), usize::from(height));
        assert!(rows.last().unwrap().starts_with('╰'));
        assert!(rows[rows.len() - 2].contains("Add to cart"));
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn plain_rows(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(plain).collect()
    }

    /// Card text with borders stripped and rows joined by single spaces.
    fn joined(rows: &[String]) -> String {
        rows.iter()
            .map(|row| row.trim_matches(|c| c == '│' || c == ' '))
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn long_titles_wrap_inside_card() {
        let title = Style::default();
        let rows = plain_rows(&flow(
            words("Connection with a handle Omnires round", title).collect(),
            20,
            0,
        ));
        assert_eq!(rows, ["Connection with a", "handle Omnires round"]);
    }

    #[test]
    fn oversized_word_is_split_not_clipped() {
        let chunks = words("a extraordinarily b", Style::default()).collect();
        let rows = plain_rows(&flow(chunks, 5, 0));
        assert_eq!(rows, ["a", "extra", "ordin", "arily", "b"]);
    }

    #[test]
    fn labelled_continuation_aligns_under_value() {
        let rows = plain_rows(&labelled_rows("Color", "brushed gold with satin finish", 20));
        assert_eq!(rows, ["Color: brushed gold", "       with satin", "       finish"]);
    }

    #[test]
    fn long_label_drops_indent() {
        let rows = plain_rows(&labelled_rows("Material of execution", "brass and zinc", 30));
        assert_eq!(rows, ["Material of execution: brass", "and zinc"]);
    }

    #[test]
    fn long_guarantee_is_shown_in_full() {
        let mut product = ProductDisplay::demo();
        let guarantee = "5 years on parts, 2 years on labour and finish";
        product.guarantee = Some(guarantee.to_string());
        let rows = text(&product);
        assert!(joined(&rows).contains(&format!("Guarantee: {guarantee}")));
        assert!(rows.iter().all(|row| row.chars().count() <= usize::from(WIDTH)));
    }

    #[test]
    fn long_spec_value_is_shown_in_full() {
        let mut product = ProductDisplay::demo();
        product.specs = vec![Spec::new(
            "Manufacturer's color",
            "brushed gold with satin finish",
        )];
        let rows = text(&product);
        assert!(joined(&rows).contains("Manufacturer's color: brushed gold with satin finish"));
    }

    #[test]
    fn wide_prices_break_before_original() {
        let mut product = ProductDisplay::demo();
        product.price = Decimal::new(1234567, 2);
        product.original_price = Decimal::new(9999999, 2);
        let rows = text(&product);
        let offer = row_of(&rows, "your price").unwrap();
        assert!(rows[offer].contains("$12345.67 net"));
        assert!(!rows[offer].contains("$99999.99"));
        assert!(rows[offer + 1].contains("$99999.99 net"));
    }

    #[test]
    fn height_counts_wrapped_rows() {
        let mut product = ProductDisplay::demo();
        product.guarantee = Some("5 years on parts, 2 years on labour and finish".into());
        let state = CardState::for_product(&product);
        let card = ProductCard::new(&product, &state);
        let height = card.height(WIDTH);
        let rows = render_to_text(card, WIDTH);
        assert_eq!(rows.len(), usize::from(height));
        assert!(rows[rows.len() - 2].contains("Add to cart"));
    }

    #[test]
    fn selector_shows_quantity_and_unit() {
        let rows = text(&ProductDisplay::demo());
        let row = row_of(&rows, "Item").unwrap();
        assert!(rows[row].contains("[  1   ] [ Item"));
    }
}
