use crate::domain::ports::RouteSink;
use crate::domain::request::PaymentRequest;
use crate::domain::trace::{Route, RouteResult};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct RouteRecord<'a> {
    method: &'a str,
    country: &'a str,
    currency: &'a str,
    bank_identifier: &'a str,
    amount: Decimal,
    pay_on_behalf_of: bool,
    route: Route,
}

/// Writes one CSV row per request: the input columns followed by `route`.
pub struct RouteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RouteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }
}

impl<W: Write> RouteSink for RouteWriter<W> {
    fn write(&mut self, request: &PaymentRequest, result: &RouteResult) -> Result<()> {
        self.writer.serialize(RouteRecord {
            method: request.method.as_str(),
            country: &request.country,
            currency: &request.currency,
            bank_identifier: &request.bank_identifier,
            amount: request.amount,
            pay_on_behalf_of: request.pay_on_behalf_of,
            route: result.route,
        })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
