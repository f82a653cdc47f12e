use crate::domain::ports::RouteSink;
use crate::domain::request::PaymentRequest;
use crate::domain::trace::{Route, RouteResult, StepResult};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TraceLine<'a> {
    request: &'a PaymentRequest,
    route: Route,
    steps: &'a [StepResult],
}

/// Writes JSON Lines: one `{"request", "route", "steps"}` object per request.
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RouteSink for TraceWriter<W> {
    fn write(&mut self, request: &PaymentRequest, result: &RouteResult) -> Result<()> {
        let line = TraceLine {
            request,
            route: result.route,
            steps: &result.steps,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
