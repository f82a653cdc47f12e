//! Domain types: payment requests, routing traces and the fixed vocabularies
//! the rules compare against.

pub mod ports;
pub mod request;
pub mod trace;
pub mod vocab;
