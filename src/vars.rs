use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// Published variable names. These are the styling layer's contract; renaming
// one breaks every stylesheet that reads it.
pub const VAR_HEADER_HEIGHT: &str = "--data-table-header-height";
pub const VAR_FOOTER_HEIGHT: &str = "--data-table-footer-height";
pub const VAR_SELECTION_COLUMN_WIDTH: &str = "--data-table-selection-column-width";
pub const VAR_SHADOW_TOP: &str = "--data-table-shadow-top-opacity";
pub const VAR_SHADOW_BOTTOM: &str = "--data-table-shadow-bottom-opacity";
pub const VAR_SHADOW_LEFT: &str = "--data-table-shadow-left-opacity";
pub const VAR_SHADOW_RIGHT: &str = "--data-table-shadow-right-opacity";
pub const VAR_FOOTER_POSITION: &str = "--data-table-footer-position";
pub const VAR_FOOTER_BOTTOM: &str = "--data-table-footer-bottom";
pub const VAR_LAST_ROW_BORDER: &str = "--data-table-last-row-border-bottom";

/// Neutral default for length variables whose element went away.
pub const ZERO_LENGTH: &str = "0px";

/// Border declaration for the last row when row borders are on.
pub const LAST_ROW_BORDER_STYLE: &str = "1px solid var(--data-table-border-color)";
pub const BORDER_NONE: &str = "none";

/// The root scope style variables are written to.
///
/// The engine's only side-effect surface besides callbacks: write-only from
/// the engine, read-only from the styling layer, last write wins.
pub trait StyleSink {
    fn set_var(&mut self, name: &str, value: &str);
}

/// Lets hosts and tests share one scope with the engine.
impl<S: StyleSink> StyleSink for Rc<RefCell<S>> {
    fn set_var(&mut self, name: &str, value: &str) {
        self.borrow_mut().set_var(name, value);
    }
}

/// Map-backed [`StyleSink`] for hosts without a native style scope.
#[derive(Debug, Clone, Default)]
pub struct StyleScope {
    vars: HashMap<String, String>,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl StyleSink for StyleScope {
    fn set_var(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

/// Format a length value, e.g. `12px` or `-0.5px`.
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Shadow opacity keyword for an edge: hidden when flush, visible otherwise.
pub fn shadow_opacity(flush: bool) -> &'static str {
    if flush {
        "0"
    } else {
        "1"
    }
}
