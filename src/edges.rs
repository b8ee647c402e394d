use crate::event::ScrollOffset;
use crate::rect::Rect;

/// Sub-pixel tolerance for the far-edge checks. Absorbs rounding from
/// fractional layout sizes, so e.g. 0.4px of remaining scroll still counts as
/// flush.
pub const EDGE_TOLERANCE: f64 = 1.0;

/// Whether the viewport is flush against each of its four scroll extents.
///
/// One instance per tracked viewport, default all-false. Fields are mutated
/// through setters that return the previous value, so rising edges are
/// observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeState {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

/// Rising edges (false -> true) produced by one recomputation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeTransitions {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeTransitions {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

impl EdgeState {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_top(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.top, value)
    }

    fn set_bottom(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.bottom, value)
    }

    fn set_left(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.left, value)
    }

    fn set_right(&mut self, value: bool) -> bool {
        std::mem::replace(&mut self.right, value)
    }

    /// Recompute all four edges from the latest measurements.
    ///
    /// While `fetching` is true, or while the table does not overflow the
    /// viewport along an axis, both edges on that axis are forced flush
    /// regardless of the scroll offset. Returns the rising edges of this
    /// pass; a flush -> not-flush change or a no-op write never reports a
    /// transition.
    pub fn sync(
        &mut self,
        table: Rect,
        viewport: Rect,
        scroll: ScrollOffset,
        fetching: bool,
    ) -> EdgeTransitions {
        let (top, bottom) = if fetching || table.height <= viewport.height {
            (true, true)
        } else {
            (
                scroll.top == 0.0,
                table.height - scroll.top - viewport.height < EDGE_TOLERANCE,
            )
        };

        // TODO: horizontal flush-forcing uses strict width equality while the
        // vertical check tolerates partial overflow; consider sharing
        // EDGE_TOLERANCE with the overflow-x detection.
        let (left, right) = if fetching || table.width == viewport.width {
            (true, true)
        } else {
            (
                scroll.left == 0.0,
                table.width - scroll.left - viewport.width < EDGE_TOLERANCE,
            )
        };

        // Every field is written each pass, never left stale; the previous
        // value decides whether this write is a rising edge.
        let prev_top = self.set_top(top);
        let prev_bottom = self.set_bottom(bottom);
        let prev_left = self.set_left(left);
        let prev_right = self.set_right(right);
        let transitions = EdgeTransitions {
            top: top && !prev_top,
            bottom: bottom && !prev_bottom,
            left: left && !prev_left,
            right: right && !prev_right,
        };

        if transitions.any() {
            log::debug!("[edges] flush transitions: {:?}", transitions);
        }

        transitions
    }
}
