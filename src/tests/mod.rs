//! Comprehensive test suite for the form builder
//!
//! This module organizes tests into logical groups: the block model, the
//! editing session, property-based invariants and end-to-end editing flows.

#[cfg(test)]
mod session_tests;
