use crate::rect::Rect;

/// How the footer should be positioned relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterPosition {
    /// Content overflows the viewport; the footer sticks to its bottom edge.
    Sticky,
    /// Content is shorter than the viewport; the footer sits right below the
    /// last row instead of floating at the viewport bottom.
    Relative,
}

impl FooterPosition {
    pub fn as_keyword(&self) -> &'static str {
        match self {
            FooterPosition::Sticky => "sticky",
            FooterPosition::Relative => "relative",
        }
    }
}

/// Derived footer placement for the current measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterPlacement {
    pub position: FooterPosition,
    /// Bottom offset in layout pixels. Zero when sticky, the (negative)
    /// content-to-viewport height difference when relative.
    pub bottom: f64,
}

/// Compute footer placement from the latest table and viewport rects.
pub fn footer_placement(table: Rect, viewport: Rect) -> FooterPlacement {
    let overflow = table.height - viewport.height;
    if overflow < 0.0 {
        FooterPlacement {
            position: FooterPosition::Relative,
            bottom: overflow,
        }
    } else {
        FooterPlacement {
            position: FooterPosition::Sticky,
            bottom: 0.0,
        }
    }
}

/// Whether the last row should draw its own bottom border.
///
/// Only when row borders are on and there is visible empty space below the
/// last row; a table filling the viewport gets its border from the viewport
/// edge itself.
pub fn last_row_border(table: Rect, viewport: Rect, row_borders: bool) -> bool {
    row_borders && table.height < viewport.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_when_content_overflows() {
        let placement = footer_placement(Rect::new(100.0, 800.0), Rect::new(100.0, 400.0));
        assert_eq!(placement.position, FooterPosition::Sticky);
        assert_eq!(placement.bottom, 0.0);
    }

    #[test]
    fn sticky_at_exact_fit() {
        let placement = footer_placement(Rect::new(100.0, 400.0), Rect::new(100.0, 400.0));
        assert_eq!(placement.position, FooterPosition::Sticky);
        assert_eq!(placement.bottom, 0.0);
    }

    #[test]
    fn relative_when_content_is_short() {
        let placement = footer_placement(Rect::new(100.0, 250.0), Rect::new(100.0, 400.0));
        assert_eq!(placement.position, FooterPosition::Relative);
        assert_eq!(placement.bottom, -150.0);
    }

    #[test]
    fn last_row_border_needs_both_conditions() {
        let short = Rect::new(100.0, 250.0);
        let tall = Rect::new(100.0, 800.0);
        let viewport = Rect::new(100.0, 400.0);

        assert!(last_row_border(short, viewport, true));
        assert!(!last_row_border(short, viewport, false));
        assert!(!last_row_border(tall, viewport, true));
        // Exact fit: the viewport edge provides the border.
        assert!(!last_row_border(viewport, viewport, true));
    }
}
