use crate::domain::request::{PaymentMethod, PaymentRequest};
use crate::error::{Result, RoutingError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One CSV row as it appears on disk, before the caller-side defaults.
#[derive(Debug, Deserialize)]
struct RequestRecord {
    method: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    bank_identifier: String,
    #[serde(default)]
    amount: Option<Decimal>,
    #[serde(default)]
    pay_on_behalf_of: Option<bool>,
}

impl From<RequestRecord> for PaymentRequest {
    fn from(record: RequestRecord) -> Self {
        Self {
            method: PaymentMethod::from(record.method),
            country: record.country,
            currency: record.currency,
            bank_identifier: record.bank_identifier,
            amount: record.amount.unwrap_or(Decimal::ZERO),
            pay_on_behalf_of: record.pay_on_behalf_of.unwrap_or(false),
        }
    }
}

/// Reads payment requests from a CSV source.
///
/// Expects the headers `method,country,currency,bank_identifier,amount,pay_on_behalf_of`.
/// Fields are trimmed and short records are accepted. An empty amount reads as
/// zero and an empty on-behalf-of flag as false.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map(|record: RequestRecord| record.into())
                .map_err(RoutingError::from)
        })
    }
}
