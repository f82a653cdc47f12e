#![allow(dead_code)]

use payroute::{PaymentMethod, PaymentRequest};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use std::str::FromStr;
use tempfile::NamedTempFile;

pub const HEADER: &str = "method,country,currency,bank_identifier,amount,pay_on_behalf_of";

pub fn request(
    method: &str,
    country: &str,
    currency: &str,
    bank_identifier: &str,
    amount: &str,
    pay_on_behalf_of: bool,
) -> PaymentRequest {
    PaymentRequest {
        method: PaymentMethod::from(method),
        country: country.to_string(),
        currency: currency.to_string(),
        bank_identifier: bank_identifier.to_string(),
        amount: Decimal::from_str(amount).expect("valid decimal literal"),
        pay_on_behalf_of,
    }
}

/// Writes `rows` under the standard header into a temporary CSV file.
pub fn requests_csv(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{HEADER}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}
