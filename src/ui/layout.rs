use ratatui::layout::Rect;

/// Splits the screen into the page body and a one-row footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(1);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height - footer_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + body.height,
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

/// Centres a `width` x `height` box inside `area` after removing `margin`
/// on every side. The box shrinks to fit when the area is too small.
pub fn centered_rect_by_size(width: u16, height: u16, margin: u16, area: Rect) -> Rect {
    let inner = Rect {
        x: area.x.saturating_add(margin),
        y: area.y.saturating_add(margin),
        width: area.width.saturating_sub(margin.saturating_mul(2)),
        height: area.height.saturating_sub(margin.saturating_mul(2)),
    };
    let width = width.min(inner.width);
    let height = height.min(inner.height);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y + (inner.height - height) / 2,
        width,
        height,
    }
}
