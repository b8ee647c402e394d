//! Viewport layout synchronization for data tables.
//!
//! The host supplies element ids, size notifications, scroll events, and
//! configuration; the engine derives layout variables (header/footer heights,
//! edge shadows, footer placement) and republishes them through a
//! [`StyleSink`], firing edge callbacks once per rising edge.

pub mod edges;
pub mod engine;
pub mod event;
pub mod footer;
pub mod observe;
pub mod rect;
pub mod vars;

pub use edges::{EdgeState, EdgeTransitions, EDGE_TOLERANCE};
pub use engine::{Config, Elements, Engine};
pub use event::{ScrollCallbacks, ScrollEvent, ScrollOffset};
pub use footer::{footer_placement, last_row_border, FooterPlacement, FooterPosition};
pub use observe::{SizeChannel, SubId};
pub use rect::{BoxSize, Rect, SizeSample};
pub use vars::{StyleScope, StyleSink};
