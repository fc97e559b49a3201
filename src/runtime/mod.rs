//! Form editing session
//!
//! This module provides the session object that owns the block list for the
//! lifetime of one editing session, together with the reorder engine and the
//! drag state machine that mutate it.

pub mod drag;
pub mod reorder;

use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::core::{validate_and_create, BlockId, BlockList, PendingBlock, ValidationError};
use drag::{DragController, DragOutcome};
use reorder::ReorderEngine;

/// Receives the block list after every change, e.g. to re-render it
pub trait ListObserver {
    fn on_list_changed(&mut self, blocks: &BlockList);
}

impl<F> ListObserver for F
where
    F: FnMut(&BlockList),
{
    fn on_list_changed(&mut self, blocks: &BlockList) {
        (*self)(blocks)
    }
}

/// One form editing session.
///
/// Owns the block list exclusively; the list only changes through block
/// creation, reorders and [`FormSession::clear`].
pub struct FormSession {
    config: EditorConfig,
    blocks: BlockList,
    pending: PendingBlock,
    engine: ReorderEngine,
    drag: DragController,
    has_blocks: bool,
    observers: Vec<Box<dyn ListObserver>>,
}

impl FormSession {
    /// Create a session with the default configuration
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        FormSession {
            engine: ReorderEngine::new(config.pin_policy),
            config,
            blocks: BlockList::new(),
            pending: PendingBlock::default(),
            drag: DragController::new(),
            has_blocks: false,
            observers: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Current block list in display order
    pub fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    /// Staged input for the next block
    pub fn pending(&self) -> &PendingBlock {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut PendingBlock {
        &mut self.pending
    }

    pub fn set_pending(&mut self, pending: PendingBlock) {
        self.pending = pending;
    }

    /// Whether at least one block has been created, i.e. the downstream
    /// build view may be opened
    pub fn has_blocks(&self) -> bool {
        self.has_blocks
    }

    /// Register an observer notified after every list change
    pub fn subscribe(&mut self, observer: impl ListObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Change the staged choice count from raw user input
    pub fn resize_choices(&mut self, raw_count: &str) -> Result<usize, ValidationError> {
        self.pending.resize_choices(raw_count)
    }

    /// Validate the staged input and append the resulting block.
    ///
    /// On failure neither the list nor the staged input changes.
    pub fn create_block(&mut self) -> Result<BlockId, ValidationError> {
        let pending = self.pending.clone();
        let id = self.add_block(&pending)?;
        if self.config.reset_pending_on_create {
            self.pending = PendingBlock::default();
        }
        Ok(id)
    }

    /// Validate `pending` and append the resulting block
    pub fn add_block(&mut self, pending: &PendingBlock) -> Result<BlockId, ValidationError> {
        let block = validate_and_create(pending, &self.blocks)?;
        let id = block.id();
        info!(
            block = %id,
            variant = block.variant().tag(),
            name = block.name(),
            "Block created"
        );
        self.blocks.push(block);
        self.has_blocks = true;
        self.drag.sync(&self.blocks);
        self.notify();
        Ok(id)
    }

    /// Move the block at `source` to `target` outside of a drag gesture.
    /// Returns whether the order changed.
    ///
    /// Allowed while a drag is in progress: the gesture keeps following the
    /// dragged block wherever this move puts it.
    pub fn reorder(&mut self, source: usize, target: usize) -> bool {
        let reordered = self.engine.reorder(&self.blocks, source, target);
        self.replace_if_changed(reordered)
    }

    /// Start dragging the block at `index`
    pub fn begin_drag(&mut self, index: usize) -> bool {
        self.drag.grab(&self.blocks, index)
    }

    /// Hover the dragged block over `target`. Returns whether the order
    /// changed.
    pub fn hover_drag(&mut self, target: usize) -> bool {
        match self.drag.hover(&self.engine, &self.blocks, target) {
            Some(reordered) => self.replace_if_changed(reordered),
            None => false,
        }
    }

    /// Drop the dragged block where it was last hovered
    pub fn end_drag(&mut self) -> Option<DragOutcome> {
        self.drag.release()
    }

    /// Abandon the drag; the list stays at its last committed order
    pub fn cancel_drag(&mut self) -> Option<DragOutcome> {
        self.drag.cancel()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Discard the whole form draft
    pub fn clear(&mut self) {
        self.drag.cancel();
        self.blocks = BlockList::new();
        self.pending = PendingBlock::default();
        self.has_blocks = false;
        debug!("Form draft cleared");
        self.notify();
    }

    fn replace_if_changed(&mut self, reordered: BlockList) -> bool {
        if reordered.ids() == self.blocks.ids() {
            return false;
        }
        self.blocks = reordered;
        self.drag.sync(&self.blocks);
        self.notify();
        true
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_list_changed(&self.blocks);
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
