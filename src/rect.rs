/// Measured box of an observed element at a point in time.
///
/// Sizes are layout pixels and may be fractional. Replaced wholesale on each
/// measurement, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// One box-metric candidate from a size notification.
///
/// Flow-relative naming: `inline` is the width, `block` the height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxSize {
    pub inline: f64,
    pub block: f64,
}

impl BoxSize {
    pub const fn new(inline: f64, block: f64) -> Self {
        Self { inline, block }
    }
}

/// A raw size-change notification as supplied by the host.
///
/// Carries both border-box and content-box candidates (possibly several, one
/// per fragment) plus a legacy content rect for hosts that report nothing
/// else.
#[derive(Debug, Clone, Default)]
pub struct SizeSample {
    pub border_box: Vec<BoxSize>,
    pub content_box: Vec<BoxSize>,
    pub content_rect: Rect,
}

impl SizeSample {
    /// Sample carrying only the legacy content rect.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            content_rect: rect,
            ..Self::default()
        }
    }

    /// Sample carrying a single border-box measurement.
    pub fn from_border_box(width: f64, height: f64) -> Self {
        Self {
            border_box: vec![BoxSize::new(width, height)],
            ..Self::default()
        }
    }

    /// Normalize the notification into a [`Rect`].
    ///
    /// Prefers the first border-box entry (includes padding and border, which
    /// is what scroll measurements assume), then the first content-box entry,
    /// then the legacy content rect.
    pub fn rect(&self) -> Rect {
        match self.border_box.first().or_else(|| self.content_box.first()) {
            Some(size) => Rect::new(size.inline, size.block),
            None => self.content_rect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_border_box_over_content_box() {
        let sample = SizeSample {
            border_box: vec![BoxSize::new(120.0, 40.0)],
            content_box: vec![BoxSize::new(100.0, 30.0)],
            content_rect: Rect::new(90.0, 20.0),
        };
        assert_eq!(sample.rect(), Rect::new(120.0, 40.0));
    }

    #[test]
    fn falls_back_to_content_box() {
        let sample = SizeSample {
            border_box: vec![],
            content_box: vec![BoxSize::new(100.0, 30.5)],
            content_rect: Rect::new(90.0, 20.0),
        };
        assert_eq!(sample.rect(), Rect::new(100.0, 30.5));
    }

    #[test]
    fn falls_back_to_legacy_rect() {
        let sample = SizeSample::from_rect(Rect::new(90.0, 20.0));
        assert_eq!(sample.rect(), Rect::new(90.0, 20.0));
    }

    #[test]
    fn only_first_fragment_counts() {
        let sample = SizeSample {
            border_box: vec![BoxSize::new(50.0, 10.0), BoxSize::new(70.0, 10.0)],
            content_box: vec![],
            content_rect: Rect::default(),
        };
        assert_eq!(sample.rect(), Rect::new(50.0, 10.0));
    }
}
