//! Selection layer: the query value and the engine that evaluates it.
//!
//! This module is intentionally separate from decoding and rendering.

pub mod engine;
pub mod selector;

pub use engine::{Level, NotFound, Selection, select};
pub use selector::{NamesOnly, Selector};
