//! Common utilities for selcraft.
//!
//! This crate provides shared infrastructure used by the selector crate and the CLI:
//! - **Warning System** - colored terminal output for non-standard input
//! - **Rectangle** - a plain object factory with an area accessor
//! - **JSON codec** - serde-backed serialize/deserialize helpers

pub mod json;
pub mod rectangle;
pub mod warning;

pub use json::{CodecError, deserialize, serialize};
pub use rectangle::{Rectangle, make_rectangle};
