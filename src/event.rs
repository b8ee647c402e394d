use crate::edges::EdgeTransitions;

/// Current scroll position of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub top: f64,
    pub left: f64,
}

impl ScrollOffset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Scroll event forwarded from the host's viewport.
///
/// Offsets the host did not report are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollEvent {
    pub scroll_top: Option<f64>,
    pub scroll_left: Option<f64>,
}

impl ScrollEvent {
    pub const fn new(scroll_top: f64, scroll_left: f64) -> Self {
        Self {
            scroll_top: Some(scroll_top),
            scroll_left: Some(scroll_left),
        }
    }

    /// Offsets with absent values defaulted to zero.
    pub fn offset(&self) -> ScrollOffset {
        ScrollOffset::new(
            self.scroll_top.unwrap_or(0.0),
            self.scroll_left.unwrap_or(0.0),
        )
    }
}

/// User-supplied scroll and edge-transition callbacks.
///
/// All slots are optional. The set is held behind a live reference by the
/// engine, so replacing it takes effect without resubscribing observers.
#[derive(Default)]
pub struct ScrollCallbacks {
    pub on_scroll: Option<Box<dyn FnMut(&ScrollEvent)>>,
    pub on_scroll_to_top: Option<Box<dyn FnMut()>>,
    pub on_scroll_to_bottom: Option<Box<dyn FnMut()>>,
    pub on_scroll_to_left: Option<Box<dyn FnMut()>>,
    pub on_scroll_to_right: Option<Box<dyn FnMut()>>,
}

impl ScrollCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(mut self, f: impl FnMut(&ScrollEvent) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub fn on_scroll_to_top(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_to_top = Some(Box::new(f));
        self
    }

    pub fn on_scroll_to_bottom(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_to_bottom = Some(Box::new(f));
        self
    }

    pub fn on_scroll_to_left(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_to_left = Some(Box::new(f));
        self
    }

    pub fn on_scroll_to_right(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_to_right = Some(Box::new(f));
        self
    }

    /// Invoke the callbacks matching the given rising edges.
    pub fn fire_edges(&mut self, transitions: EdgeTransitions) {
        if transitions.top {
            if let Some(f) = self.on_scroll_to_top.as_mut() {
                f();
            }
        }
        if transitions.bottom {
            if let Some(f) = self.on_scroll_to_bottom.as_mut() {
                f();
            }
        }
        if transitions.left {
            if let Some(f) = self.on_scroll_to_left.as_mut() {
                f();
            }
        }
        if transitions.right {
            if let Some(f) = self.on_scroll_to_right.as_mut() {
                f();
            }
        }
    }
}
