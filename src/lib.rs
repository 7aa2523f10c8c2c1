//! Blockfall (workspace facade crate).
//!
//! Re-exports `blockfall::{core,input,term,types}` so the binary, tests and
//! benches share one import path while the implementation lives in
//! dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
