//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, adapters and shared types under one path
//! (`blockfall::{core,input,term,types}`), and hosts the binary's logging setup.

pub mod logging;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
