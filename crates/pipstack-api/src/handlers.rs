//! Request handlers.

pub mod compositions;
pub mod health;

pub use compositions::*;
pub use health::*;
