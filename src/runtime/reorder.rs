//! Drag reorder engine
//!
//! Computes the new block order for a `(source, target)` pair coming from the
//! drag controller. Called once per hover event, so every call is a single
//! O(n) splice on a copy and always yields a fully consistent list.

use tracing::{debug, warn};

use crate::config::PinPolicy;
use crate::core::BlockList;

/// Reorders block lists under a title pinning policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReorderEngine {
    policy: PinPolicy,
}

impl ReorderEngine {
    pub fn new(policy: PinPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PinPolicy {
        self.policy
    }

    /// Move the block at `source` to `target` and return the new list.
    ///
    /// A title block always lands at index 0 whatever the target. Equal
    /// indices return the list unchanged. Under [`PinPolicy::Enforce`] a
    /// title elsewhere in the list is re-pinned too, and a non-title drop
    /// onto index 0 only normalises the list instead of displacing the
    /// title.
    pub fn reorder(&self, list: &BlockList, source: usize, target: usize) -> BlockList {
        if source == target {
            return list.clone();
        }
        if source >= list.len() {
            warn!(source, target, len = list.len(), "Reorder source out of range, ignoring");
            return list.clone();
        }

        let mut working = list.clone();
        let moved = working.remove(source);
        let moved_id = moved.id();

        if moved.is_title() {
            working.insert_clamped(0, moved);
            debug!(source, target, block = %moved_id, "Pinned dragged title to head");
            return working;
        }

        match self.policy {
            PinPolicy::DraggedOnly => working.insert_clamped(target, moved),
            PinPolicy::Enforce => {
                if target == 0 && working.title_position().is_some() {
                    let mut normalised = list.clone();
                    normalised.pin_title();
                    debug!(source, target, block = %moved_id, "Drop onto pinned title slot refused");
                    return normalised;
                }
                working.insert_clamped(target, moved);
                working.pin_title();
            }
        }

        debug!(source, target, block = %moved_id, "Reordered block");
        working
    }
}

/// Reorder with the default [`PinPolicy::Enforce`] policy
pub fn reorder(list: &BlockList, source: usize, target: usize) -> BlockList {
    ReorderEngine::default().reorder(list, source, target)
}
