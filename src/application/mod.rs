//! Application layer: the routing rules, the cascade that applies them, and
//! batch routing of a request stream into a [`RouteSink`](crate::domain::ports::RouteSink).

pub mod batch;
pub mod engine;
pub mod rules;
