//! Adapters between the routing engine and the outside world: CSV input,
//! and CSV, JSON Lines or plain-text output.

pub mod csv;
pub mod json;
pub mod text;
