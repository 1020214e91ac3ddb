use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Carve the notice banner off the top of the body when one is shown.
pub fn banner_split(area: Rect, banner: bool) -> (Option<Rect>, Rect) {
    if !banner || area.height < 4 {
        return (None, area);
    }
    let banner_area = Rect {
        height: 3,
        ..area
    };
    let content = Rect {
        y: area.y + 3,
        height: area.height - 3,
        ..area
    };
    (Some(banner_area), content)
}

/// Center a popup of a fixed size, clamped to `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
