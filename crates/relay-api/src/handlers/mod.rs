//! API request handlers.

pub mod health;

pub use health::*;
