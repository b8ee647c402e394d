use std::collections::HashMap;

use crate::rect::{Rect, SizeSample};

/// Callback invoked with the fresh, normalized rects of one delivery.
///
/// A subscription over several elements receives all of its fresh rects in a
/// single invocation, so correlated measurements are seen together.
pub type ChangeFn = Box<dyn FnMut(&[(&str, Rect)])>;

/// Callback invoked exactly once when a subscription is disposed.
pub type DetachFn = Box<dyn FnOnce()>;

/// Disposer handle for an active subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubId(u64);

struct Subscription {
    targets: Vec<String>,
    on_change: ChangeFn,
    on_detach: DetachFn,
}

/// Routes host size notifications to per-element subscriptions.
///
/// Elements are identified by host-minted string ids. Observing an absent
/// element is a no-op; the caller gets no disposer back and must tolerate
/// that (e.g. an optional selection column that is not rendered).
#[derive(Default)]
pub struct SizeChannel {
    next_id: u64,
    subs: HashMap<u64, Subscription>,
}

impl SizeChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a single element. Returns `None` when the target is absent.
    pub fn observe(
        &mut self,
        target: Option<&str>,
        on_change: ChangeFn,
        on_detach: DetachFn,
    ) -> Option<SubId> {
        self.observe_joint(&[target], on_change, on_detach)
    }

    /// Observe several elements through one shared subscription.
    ///
    /// No-op unless every target is present: a joint recomputation that only
    /// ever saw half of its inputs would race against itself.
    pub fn observe_joint(
        &mut self,
        targets: &[Option<&str>],
        on_change: ChangeFn,
        on_detach: DetachFn,
    ) -> Option<SubId> {
        let mut resolved = Vec::with_capacity(targets.len());
        for target in targets {
            resolved.push((*target)?.to_string());
        }

        let id = self.next_id;
        self.next_id += 1;
        self.subs.insert(
            id,
            Subscription {
                targets: resolved,
                on_change,
                on_detach,
            },
        );
        Some(SubId(id))
    }

    /// Deliver a batch of raw size notifications.
    ///
    /// Each live subscription with at least one matching element gets one
    /// `on_change` call carrying all of its fresh rects, normalized through
    /// [`SizeSample::rect`]. Disposed subscriptions never see a delivery.
    pub fn deliver(&mut self, batch: &[(&str, SizeSample)]) {
        for sub in self.subs.values_mut() {
            let fresh: Vec<(&str, Rect)> = batch
                .iter()
                .filter(|(id, _)| sub.targets.iter().any(|t| t == id))
                .map(|(id, sample)| (*id, sample.rect()))
                .collect();
            if !fresh.is_empty() {
                (sub.on_change)(&fresh);
            }
        }
    }

    /// Stop a subscription and invoke its detach callback.
    ///
    /// Idempotent: disposing an already-disposed id does nothing, so the
    /// detach callback runs at most once.
    pub fn dispose(&mut self, id: SubId) {
        if let Some(sub) = self.subs.remove(&id.0) {
            log::debug!("[observe] disposed subscription over {:?}", sub.targets);
            (sub.on_detach)();
        }
    }

    pub fn is_active(&self, id: SubId) -> bool {
        self.subs.contains_key(&id.0)
    }
}
