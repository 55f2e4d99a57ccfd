//! CLI library components for the payment splitter.

pub mod logging;
pub mod pipeline;
