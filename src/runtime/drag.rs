//! Drag gesture state machine
//!
//! `Idle -> Dragging` on grab, `Dragging -> Dragging` on every hover over a
//! new index (which fires a reorder), `Dragging -> Idle` on release or
//! cancel. The dragged block is tracked by id, so its current index follows
//! the list even when a reorder puts it somewhere other than the hovered
//! index (a title snapping to the head).

use tracing::trace;

use super::reorder::ReorderEngine;
use crate::core::{BlockId, BlockList};

/// State of one drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Block being dragged
        block: BlockId,
        /// Index the block had when grabbed
        origin: usize,
        /// Index the block has in the current list
        current: usize,
        /// Whether any hover has reordered the list
        moved: bool,
    },
}

/// Result of finishing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub block: BlockId,
    pub origin: usize,
    /// Final index, or the origin when the gesture never moved the block
    pub index: usize,
    pub moved: bool,
}

/// Turns drag events into reorder calls
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Grab the block at `index`. Returns false if there is no such block or
    /// a gesture is already in progress.
    pub fn grab(&mut self, list: &BlockList, index: usize) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(block) = list.get(index) else {
            return false;
        };
        trace!(index, block = %block.id(), "Drag started");
        self.state = DragState::Dragging {
            block: block.id(),
            origin: index,
            current: index,
            moved: false,
        };
        true
    }

    /// Hover the dragged block over `target`.
    ///
    /// Returns the reordered list when the order changed, `None` when idle
    /// or when hovering the block's own current slot. The dragged block is
    /// looked up in `list` on every call, so blocks added or moved since the
    /// grab do not redirect the gesture. If the block is gone the gesture
    /// ends.
    pub fn hover(
        &mut self,
        engine: &ReorderEngine,
        list: &BlockList,
        target: usize,
    ) -> Option<BlockList> {
        let DragState::Dragging {
            block,
            origin,
            moved,
            ..
        } = self.state
        else {
            return None;
        };
        let Some(current) = list.position_of(block) else {
            trace!(block = %block, "Dragged block no longer listed, ending drag");
            self.state = DragState::Idle;
            return None;
        };
        if target == current {
            self.state = DragState::Dragging {
                block,
                origin,
                current,
                moved,
            };
            return None;
        }

        let reordered = engine.reorder(list, current, target);
        let now = reordered.position_of(block)?;
        let changed = reordered.ids() != list.ids();
        self.state = DragState::Dragging {
            block,
            origin,
            current: now,
            moved: moved || changed,
        };
        trace!(target, index = now, changed, "Drag hover");
        changed.then_some(reordered)
    }

    /// Re-read the dragged block's index from `list`. Needed when the list
    /// changed outside the gesture since the last hover.
    pub fn sync(&mut self, list: &BlockList) {
        let DragState::Dragging { block, .. } = self.state else {
            return;
        };
        match list.position_of(block) {
            Some(index) => {
                if let DragState::Dragging { current, .. } = &mut self.state {
                    *current = index;
                }
            }
            None => self.state = DragState::Idle,
        }
    }

    /// Release the dragged block. The list already reflects the last hover.
    pub fn release(&mut self) -> Option<DragOutcome> {
        let outcome = self.finish();
        if let Some(outcome) = &outcome {
            trace!(block = %outcome.block, index = outcome.index, "Drag released");
        }
        outcome
    }

    /// Abandon the gesture. Reorders already applied by earlier hovers stay.
    pub fn cancel(&mut self) -> Option<DragOutcome> {
        let outcome = self.finish();
        if let Some(outcome) = &outcome {
            trace!(block = %outcome.block, "Drag cancelled");
        }
        outcome
    }

    fn finish(&mut self) -> Option<DragOutcome> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging {
                block,
                origin,
                current,
                moved,
            } => Some(DragOutcome {
                block,
                origin,
                index: current,
                moved,
            }),
        }
    }
}
