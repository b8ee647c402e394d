use std::cell::RefCell;
use std::rc::Rc;

use crate::edges::{EdgeState, EdgeTransitions};
use crate::event::{ScrollCallbacks, ScrollEvent, ScrollOffset};
use crate::footer::{footer_placement, last_row_border, FooterPosition};
use crate::observe::{SizeChannel, SubId};
use crate::rect::{Rect, SizeSample};
use crate::vars::{
    px, shadow_opacity, StyleSink, BORDER_NONE, LAST_ROW_BORDER_STYLE, VAR_FOOTER_BOTTOM,
    VAR_FOOTER_HEIGHT, VAR_FOOTER_POSITION, VAR_HEADER_HEIGHT, VAR_LAST_ROW_BORDER,
    VAR_SELECTION_COLUMN_WIDTH, VAR_SHADOW_BOTTOM, VAR_SHADOW_LEFT, VAR_SHADOW_RIGHT,
    VAR_SHADOW_TOP, ZERO_LENGTH,
};

/// Host-supplied configuration. Read-mostly; the engine always sees the
/// latest value, even from inside long-lived subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// While true, all four edges are forced flush (shadows hidden).
    pub fetching: bool,
    /// Whether the last row may draw its own bottom border.
    pub row_borders: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetching(mut self, fetching: bool) -> Self {
        self.fetching = fetching;
        self
    }

    pub fn row_borders(mut self, row_borders: bool) -> Self {
        self.row_borders = row_borders;
        self
    }
}

/// Host element ids for the table parts the engine observes.
///
/// Every slot is optional; an absent slot is simply not observed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Elements {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub selection_column: Option<String>,
    pub table: Option<String>,
    pub viewport: Option<String>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, id: impl Into<String>) -> Self {
        self.header = Some(id.into());
        self
    }

    pub fn footer(mut self, id: impl Into<String>) -> Self {
        self.footer = Some(id.into());
        self
    }

    pub fn selection_column(mut self, id: impl Into<String>) -> Self {
        self.selection_column = Some(id.into());
        self
    }

    pub fn table(mut self, id: impl Into<String>) -> Self {
        self.table = Some(id.into());
        self
    }

    pub fn viewport(mut self, id: impl Into<String>) -> Self {
        self.viewport = Some(id.into());
        self
    }
}

/// Which rect dimension a length variable tracks.
#[derive(Clone, Copy)]
enum Dimension {
    Width,
    Height,
}

/// Mutable engine state shared with the subscription closures.
///
/// Kept behind one `Rc<RefCell>` so a closure registered at bind time reads
/// the configuration and rect caches as they are now, not as they were when
/// it was registered.
struct State {
    sink: Box<dyn StyleSink>,
    config: Config,
    table_rect: Rect,
    viewport_rect: Rect,
    scroll: ScrollOffset,
    edges: EdgeState,
}

impl State {
    fn set_px(&mut self, name: &str, value: f64) {
        self.sink.set_var(name, &px(value));
    }

    /// One synchronous recomputation pass: edges, shadows, footer placement,
    /// last-row border. Returns the rising edges for the caller to fire once
    /// the state borrow is released.
    fn sync_viewport(&mut self) -> EdgeTransitions {
        let transitions = self.edges.sync(
            self.table_rect,
            self.viewport_rect,
            self.scroll,
            self.config.fetching,
        );

        self.sink
            .set_var(VAR_SHADOW_TOP, shadow_opacity(self.edges.top));
        self.sink
            .set_var(VAR_SHADOW_BOTTOM, shadow_opacity(self.edges.bottom));
        self.sink
            .set_var(VAR_SHADOW_LEFT, shadow_opacity(self.edges.left));
        self.sink
            .set_var(VAR_SHADOW_RIGHT, shadow_opacity(self.edges.right));

        let placement = footer_placement(self.table_rect, self.viewport_rect);
        self.sink
            .set_var(VAR_FOOTER_POSITION, placement.position.as_keyword());
        self.set_px(VAR_FOOTER_BOTTOM, placement.bottom);

        let bordered = last_row_border(
            self.table_rect,
            self.viewport_rect,
            self.config.row_borders,
        );
        self.sink.set_var(
            VAR_LAST_ROW_BORDER,
            if bordered {
                LAST_ROW_BORDER_STYLE
            } else {
                BORDER_NONE
            },
        );

        transitions
    }

    /// Detach reset for the joint table+viewport subscription: clear cached
    /// measurements and republish neutral viewport variables. Never fires
    /// scroll callbacks; a teardown is not a scroll transition.
    fn reset_viewport(&mut self) {
        self.table_rect = Rect::default();
        self.viewport_rect = Rect::default();
        self.scroll = ScrollOffset::default();
        self.edges = EdgeState::default();

        for var in [
            VAR_SHADOW_TOP,
            VAR_SHADOW_BOTTOM,
            VAR_SHADOW_LEFT,
            VAR_SHADOW_RIGHT,
        ] {
            self.sink.set_var(var, shadow_opacity(true));
        }
        self.sink
            .set_var(VAR_FOOTER_POSITION, FooterPosition::Sticky.as_keyword());
        self.sink.set_var(VAR_FOOTER_BOTTOM, ZERO_LENGTH);
        self.sink.set_var(VAR_LAST_ROW_BORDER, BORDER_NONE);
    }
}

#[derive(Default)]
struct Subs {
    header: Option<SubId>,
    footer: Option<SubId>,
    selection: Option<SubId>,
    grid: Option<SubId>,
}

/// Wires size observations, edge tracking, and footer positioning to a style
/// sink, and exposes the host-facing entry points: element binding, resize
/// notifications, scroll events, and configuration changes.
pub struct Engine {
    state: Rc<RefCell<State>>,
    callbacks: Rc<RefCell<ScrollCallbacks>>,
    channel: SizeChannel,
    subs: Subs,
    elements: Elements,
}

impl Engine {
    pub fn new(sink: impl StyleSink + 'static, config: Config) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                sink: Box::new(sink),
                config,
                table_rect: Rect::default(),
                viewport_rect: Rect::default(),
                scroll: ScrollOffset::default(),
                edges: EdgeState::default(),
            })),
            callbacks: Rc::new(RefCell::new(ScrollCallbacks::default())),
            channel: SizeChannel::new(),
            subs: Subs::default(),
            elements: Elements::default(),
        }
    }

    /// Bind (or rebind) the observed elements.
    ///
    /// Each changed slot disposes its previous subscription, which resets the
    /// associated variables to their neutral defaults, then observes the new
    /// target if present. Unchanged slots keep their subscription; rebinding
    /// with identical elements is a no-op.
    pub fn bind(&mut self, elements: Elements) {
        if elements.header != self.elements.header {
            if let Some(id) = self.subs.header.take() {
                self.channel.dispose(id);
            }
            self.subs.header = self.observe_length(
                elements.header.as_deref(),
                VAR_HEADER_HEIGHT,
                Dimension::Height,
            );
        }
        if elements.footer != self.elements.footer {
            if let Some(id) = self.subs.footer.take() {
                self.channel.dispose(id);
            }
            self.subs.footer = self.observe_length(
                elements.footer.as_deref(),
                VAR_FOOTER_HEIGHT,
                Dimension::Height,
            );
        }
        if elements.selection_column != self.elements.selection_column {
            if let Some(id) = self.subs.selection.take() {
                self.channel.dispose(id);
            }
            self.subs.selection = self.observe_length(
                elements.selection_column.as_deref(),
                VAR_SELECTION_COLUMN_WIDTH,
                Dimension::Width,
            );
        }
        if elements.table != self.elements.table || elements.viewport != self.elements.viewport {
            if let Some(id) = self.subs.grid.take() {
                self.channel.dispose(id);
            }
            self.subs.grid =
                self.observe_grid(elements.table.as_deref(), elements.viewport.as_deref());
        }

        log::debug!("[sync] bound elements: {:?}", elements);
        self.elements = elements;
    }

    /// Forward a batch of raw size notifications from the host.
    ///
    /// Jointly observed elements (table + viewport) that change in the same
    /// batch are seen by a single recomputation pass.
    pub fn notify_resize(&mut self, batch: &[(&str, SizeSample)]) {
        self.channel.deliver(batch);
    }

    /// Entry point for scroll events forwarded from the host's viewport.
    ///
    /// The raw event goes to the user's `on_scroll` first, then the offsets
    /// are cached and the edge state recomputed.
    pub fn handle_scroll(&mut self, event: &ScrollEvent) {
        if let Some(f) = self.callbacks.borrow_mut().on_scroll.as_mut() {
            f(event);
        }

        let transitions = {
            let mut state = self.state.borrow_mut();
            state.scroll = event.offset();
            state.sync_viewport()
        };
        self.callbacks.borrow_mut().fire_edges(transitions);
    }

    /// Replace the whole configuration and republish.
    pub fn set_config(&mut self, config: Config) {
        {
            let mut state = self.state.borrow_mut();
            if state.config == config {
                return;
            }
            log::debug!("[sync] config changed: {:?}", config);
            state.config = config;
        }
        self.refresh();
    }

    pub fn set_fetching(&mut self, fetching: bool) {
        let config = self.state.borrow().config.fetching(fetching);
        self.set_config(config);
    }

    pub fn set_row_borders(&mut self, row_borders: bool) {
        let config = self.state.borrow().config.row_borders(row_borders);
        self.set_config(config);
    }

    /// Re-run hook: recompute and republish from the cached measurements,
    /// without a new size notification.
    pub fn refresh(&mut self) {
        let transitions = self.state.borrow_mut().sync_viewport();
        self.callbacks.borrow_mut().fire_edges(transitions);
    }

    /// Replace the scroll callback set. Takes effect immediately, without
    /// resubscribing observers.
    pub fn set_callbacks(&mut self, callbacks: ScrollCallbacks) {
        *self.callbacks.borrow_mut() = callbacks;
    }

    pub fn edges(&self) -> EdgeState {
        self.state.borrow().edges
    }

    pub fn config(&self) -> Config {
        self.state.borrow().config
    }

    /// Observe one element and mirror a rect dimension into a length
    /// variable; on detach, reset it to the zero-length default.
    fn observe_length(
        &mut self,
        target: Option<&str>,
        var: &'static str,
        dimension: Dimension,
    ) -> Option<SubId> {
        let state = Rc::clone(&self.state);
        let detach_state = Rc::clone(&self.state);
        self.channel.observe(
            target,
            Box::new(move |fresh: &[(&str, Rect)]| {
                if let Some((_, rect)) = fresh.first() {
                    let value = match dimension {
                        Dimension::Width => rect.width,
                        Dimension::Height => rect.height,
                    };
                    state.borrow_mut().set_px(var, value);
                }
            }),
            Box::new(move || {
                detach_state.borrow_mut().sink.set_var(var, ZERO_LENGTH);
            }),
        )
    }

    /// Observe table and viewport jointly so one recomputation pass sees both
    /// fresh rects together rather than racing across two callbacks.
    fn observe_grid(&mut self, table: Option<&str>, viewport: Option<&str>) -> Option<SubId> {
        let table_id = table?.to_string();
        let state = Rc::clone(&self.state);
        let detach_state = Rc::clone(&self.state);
        let callbacks = Rc::clone(&self.callbacks);
        self.channel.observe_joint(
            &[table, viewport],
            Box::new(move |fresh: &[(&str, Rect)]| {
                let transitions = {
                    let mut s = state.borrow_mut();
                    for (id, rect) in fresh {
                        if *id == table_id {
                            s.table_rect = *rect;
                        } else {
                            s.viewport_rect = *rect;
                        }
                    }
                    s.sync_viewport()
                };
                callbacks.borrow_mut().fire_edges(transitions);
            }),
            Box::new(move || {
                detach_state.borrow_mut().reset_viewport();
            }),
        )
    }
}
