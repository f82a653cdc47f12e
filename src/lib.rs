//! Settlement-rail routing for cross-border payments.
//!
//! [`evaluate`] classifies a [`PaymentRequest`] into FPS, ACT, RTGS or TT (or
//! UNKNOWN) and returns the full trace of the rules it evaluated.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::engine::evaluate;
pub use domain::request::{PaymentMethod, PaymentRequest};
pub use domain::trace::{Condition, Route, RouteResult, StepResult};
