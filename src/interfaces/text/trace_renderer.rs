use crate::domain::ports::RouteSink;
use crate::domain::request::PaymentRequest;
use crate::domain::trace::{Condition, RouteResult, StepResult};
use crate::error::Result;
use std::io::Write;

/// Renders each routing trace as an indented, human-readable audit block.
///
/// ```text
/// LOCAL HKG HKD bank="" amount=1000 pobo=false -> FPS
///   [PASS] Channel Eligibility Check (any of)
///          [x] Method is LOCAL, SWIFT or UNSPECIFIED
///          [ ] On behalf of, bank code present, country HKG, currency HKD/USD/EUR/CNH
///   [PASS] FPS (all of)
///          [x] Method is not SWIFT
///          ...
/// ```
pub struct TraceRenderer<W: Write> {
    out: W,
    rendered: usize,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, rendered: 0 }
    }

    fn render_step(&mut self, step: &StepResult) -> Result<()> {
        if step.is_skipped() {
            match &step.reason {
                Some(reason) => writeln!(self.out, "  [SKIP] {}: {}", step.name, reason)?,
                None => writeln!(self.out, "  [SKIP] {}", step.name)?,
            }
            return Ok(());
        }

        let status = if step.passed { "PASS" } else { "FAIL" };
        let (kind, list): (&str, &[Condition]) = match (&step.conditions, &step.scenarios) {
            (Some(conditions), _) => (" (all of)", conditions.as_slice()),
            (None, Some(scenarios)) => (" (any of)", scenarios.as_slice()),
            (None, None) => ("", &[]),
        };
        writeln!(self.out, "  [{status}] {}{kind}", step.name)?;
        for condition in list {
            self.render_condition(condition)?;
        }
        Ok(())
    }

    fn render_condition(&mut self, condition: &Condition) -> Result<()> {
        let mark = if condition.met { 'x' } else { ' ' };
        writeln!(self.out, "         [{mark}] {}", condition.label)?;
        Ok(())
    }
}

impl<W: Write> RouteSink for TraceRenderer<W> {
    fn write(&mut self, request: &PaymentRequest, result: &RouteResult) -> Result<()> {
        if self.rendered > 0 {
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "{} {} {} bank={:?} amount={} pobo={} -> {}",
            request.method,
            request.country,
            request.currency,
            request.bank_identifier,
            request.amount,
            request.pay_on_behalf_of,
            result.route
        )?;
        for step in &result.steps {
            self.render_step(step)?;
        }
        self.rendered += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
