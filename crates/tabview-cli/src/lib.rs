//! Library components for the tabview CLI.

pub mod logging;
pub mod render;
pub mod session;
pub mod source;
