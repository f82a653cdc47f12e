use super::request::PaymentRequest;
use super::trace::RouteResult;
use crate::error::Result;

/// Destination for evaluated routing decisions.
pub trait RouteSink {
    fn write(&mut self, request: &PaymentRequest, result: &RouteResult) -> Result<()>;

    /// Flushes anything still buffered.
    fn finish(&mut self) -> Result<()>;
}

pub type RouteSinkBox = Box<dyn RouteSink>;
