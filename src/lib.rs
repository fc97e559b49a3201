//! Form Builder - block model and drag reorder engine
//!
//! This crate provides the core of an interactive survey/form builder: typed
//! form blocks, the validation rules gating block creation, and the reorder
//! engine that keeps a title block pinned to the head of the list while the
//! user drags blocks around.

pub mod config;
pub mod core;
pub mod runtime;
mod tests;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

// Re-export commonly used types
pub use crate::config::{EditorConfig, PinPolicy};
pub use crate::core::{
    resize_choice_group, validate_and_create, Block, BlockId, BlockList, PendingBlock,
    RequiredFlag, ValidationError, Variant,
};
pub use crate::runtime::reorder::{reorder, ReorderEngine};
pub use crate::runtime::{FormSession, ListObserver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
