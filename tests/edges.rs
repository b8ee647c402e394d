use tablesync::{EdgeState, Rect, ScrollOffset};

fn rects(table_h: f64, viewport_h: f64) -> (Rect, Rect) {
    (Rect::new(500.0, table_h), Rect::new(500.0, viewport_h))
}

// ============================================================================
// Forced-flush conditions
// ============================================================================

#[test]
fn test_fitting_content_forces_vertical_edges() {
    let (table, viewport) = rects(300.0, 400.0);

    // Scroll offset must not matter when the content fits.
    for top in [0.0, 50.0, 1000.0] {
        let mut edges = EdgeState::new();
        edges.sync(table, viewport, ScrollOffset::new(top, 0.0), false);
        assert!(edges.top, "top not flush at offset {}", top);
        assert!(edges.bottom, "bottom not flush at offset {}", top);
    }
}

#[test]
fn test_exact_fit_forces_vertical_edges() {
    let (table, viewport) = rects(400.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(123.0, 0.0), false);
    assert!(edges.top);
    assert!(edges.bottom);
}

#[test]
fn test_fetching_forces_all_edges() {
    // Geometry says mid-scroll on both axes; fetching overrides it all.
    let table = Rect::new(900.0, 1000.0);
    let viewport = Rect::new(400.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(300.0, 200.0), true);
    assert!(edges.top);
    assert!(edges.bottom);
    assert!(edges.left);
    assert!(edges.right);
}

#[test]
fn test_equal_width_forces_horizontal_edges() {
    let table = Rect::new(400.0, 1000.0);
    let viewport = Rect::new(400.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), false);
    assert!(edges.left);
    assert!(edges.right);
}

#[test]
fn test_narrower_table_is_not_forced_horizontally() {
    // Strict width equality: a table narrower than the viewport is not equal,
    // so the horizontal edges come from the scroll math instead.
    let table = Rect::new(300.0, 1000.0);
    let viewport = Rect::new(400.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::default(), false);
    assert!(edges.left);
    // 300 - 0 - 400 = -100 < 1, so the far edge reads flush too.
    assert!(edges.right);
}

// ============================================================================
// Scroll-derived edges
// ============================================================================

#[test]
fn test_top_flush_at_zero_offset() {
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(0.0, 0.0), false);
    assert!(edges.top);
    assert!(!edges.bottom);
}

#[test]
fn test_mid_scroll_has_no_vertical_flush() {
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), false);
    assert!(!edges.top);
    assert!(!edges.bottom);
}

#[test]
fn test_bottom_flush_within_subpixel_tolerance() {
    // 1000 - 600.4 - 400 = -0.4, inside the 1px tolerance.
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(600.4, 0.0), false);
    assert!(!edges.top);
    assert!(edges.bottom);
}

#[test]
fn test_bottom_not_flush_just_outside_tolerance() {
    // 1000 - 599 - 400 = 1, not strictly below the tolerance.
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();
    edges.sync(table, viewport, ScrollOffset::new(599.0, 0.0), false);
    assert!(!edges.bottom);
}

#[test]
fn test_horizontal_scroll_edges() {
    let table = Rect::new(900.0, 1000.0);
    let viewport = Rect::new(400.0, 400.0);
    let mut edges = EdgeState::new();

    edges.sync(table, viewport, ScrollOffset::new(0.0, 0.0), false);
    assert!(edges.left);
    assert!(!edges.right);

    edges.sync(table, viewport, ScrollOffset::new(0.0, 499.6), false);
    assert!(!edges.left);
    assert!(edges.right);
}

// ============================================================================
// Rising-edge transitions
// ============================================================================

#[test]
fn test_transition_reported_only_on_rising_edge() {
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();

    let t = edges.sync(table, viewport, ScrollOffset::new(600.0, 0.0), false);
    assert!(t.bottom, "first arrival at the bottom is a rising edge");
    assert!(!t.top);

    // Still at the bottom: no-op write, no transition.
    let t = edges.sync(table, viewport, ScrollOffset::new(600.0, 0.0), false);
    assert!(!t.bottom);

    // Leaving the bottom is a falling edge and never reported.
    let t = edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), false);
    assert!(!t.any());

    // Coming back is a fresh rising edge.
    let t = edges.sync(table, viewport, ScrollOffset::new(600.0, 0.0), false);
    assert!(t.bottom);
}

#[test]
fn test_initial_sync_at_origin_rises_top_and_left() {
    let table = Rect::new(900.0, 1000.0);
    let viewport = Rect::new(400.0, 400.0);
    let mut edges = EdgeState::new();

    let t = edges.sync(table, viewport, ScrollOffset::default(), false);
    assert!(t.top);
    assert!(t.left);
    assert!(!t.bottom);
    assert!(!t.right);
}

#[test]
fn test_fetching_toggle_is_a_rising_edge_once() {
    let (table, viewport) = rects(1000.0, 400.0);
    let mut edges = EdgeState::new();

    edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), false);
    let t = edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), true);
    assert!(t.top && t.bottom && t.left && t.right);

    // Staying in fetching reports nothing further.
    let t = edges.sync(table, viewport, ScrollOffset::new(300.0, 0.0), true);
    assert!(!t.any());
}
