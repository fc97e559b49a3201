//! Ordered block list
//!
//! A [`BlockList`] is the form draft: blocks in display order. Insertion
//! order is preserved except that a title block is kept at the head.

use serde::Serialize;

use super::block::Block;
use super::BlockId;

/// Ordered sequence of blocks composing a form draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    /// Create an empty list
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Wrap blocks in the given order.
    ///
    /// No pinning is applied, so a title may sit anywhere; callers that
    /// restore or construct lists externally get exactly what they pass in.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_vec(self) -> Vec<Block> {
        self.blocks
    }

    /// Block ids in list order
    pub fn ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(Block::id).collect()
    }

    /// Whether a button block is present
    pub fn has_button(&self) -> bool {
        self.blocks.iter().any(Block::is_button)
    }

    /// Index of the first title block, if any
    pub fn title_position(&self) -> Option<usize> {
        self.blocks.iter().position(Block::is_title)
    }

    /// Index of the block with the given id
    pub fn position_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    /// Whether the title-at-front invariant holds
    pub fn is_title_pinned(&self) -> bool {
        matches!(self.title_position(), None | Some(0))
    }

    /// Append a block. A title goes to the head instead.
    pub(crate) fn push(&mut self, block: Block) {
        if block.is_title() {
            self.blocks.insert(0, block);
        } else {
            self.blocks.push(block);
        }
    }

    /// Move the first title block to index 0, keeping everything else in
    /// relative order. Returns whether the order changed.
    pub(crate) fn pin_title(&mut self) -> bool {
        match self.title_position() {
            Some(pos) if pos > 0 => {
                let title = self.blocks.remove(pos);
                self.blocks.insert(0, title);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn remove(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }

    /// Insert with splice semantics: indices past the end append.
    pub(crate) fn insert_clamped(&mut self, index: usize, block: Block) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }
}

impl<'a> IntoIterator for &'a BlockList {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl From<Vec<Block>> for BlockList {
    fn from(blocks: Vec<Block>) -> Self {
        Self::from_blocks(blocks)
    }
}
