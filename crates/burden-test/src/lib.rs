//! Test fixtures for the Burden engine.
//!
//! Worlds here always use [`HeadlessBackend`], so tests can inspect uploads
//! and draw calls without a graphics device.

pub mod fixtures;

pub use fixtures::{empty_world, flat_world, single_block_world, TestBody, TestWorld};

pub use burden_world::HeadlessBackend;
