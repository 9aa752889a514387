//! Error types

mod adapter;
mod load;

pub use adapter::*;
pub use load::*;
