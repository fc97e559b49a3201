//! Core block abstractions and types
//!
//! This module defines the form block, its variants, the staged pending input
//! a block is built from, the validation rules gating block creation, and the
//! ordered block list that makes up a form draft.

pub mod block;
pub mod list;
pub mod pending;
pub mod validation;
pub mod variant;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use block::{Block, ValidationError};
pub use list::BlockList;
pub use pending::{PendingBlock, RequiredFlag};
pub use validation::{resize_choice_group, validate_and_create};
pub use variant::Variant;

/// Unique identifier for a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub Uuid);

impl BlockId {
    /// Generate a new random block ID
    pub fn new() -> Self {
        BlockId(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
