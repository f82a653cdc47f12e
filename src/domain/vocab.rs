//! Fixed lookup vocabularies consulted by the routing rules.
//!
//! Everything here is compile-time data. Comparisons against these tables are
//! case-sensitive; only the bank identifier is normalized before comparison.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const METHOD_LOCAL: &str = "LOCAL";
pub const METHOD_SWIFT: &str = "SWIFT";
pub const METHOD_UNSPECIFIED: &str = "UNSPECIFIED";

/// Payment methods that enter the primary rail cascade unconditionally.
pub const METHODS: &[&str] = &[METHOD_LOCAL, METHOD_SWIFT, METHOD_UNSPECIFIED];

/// Hong-Kong country code.
pub const HK_COUNTRY: &str = "HKG";

pub const COUNTRIES: &[&str] = &[HK_COUNTRY, "USA", "GBR", "CHN", "SGP"];

pub const HKD: &str = "HKD";
pub const USD: &str = "USD";
pub const EUR: &str = "EUR";
pub const CNH: &str = "CNH";
pub const GBP: &str = "GBP";

pub const CURRENCIES: &[&str] = &[HKD, USD, EUR, CNH, GBP, "JPY", "SGD", "AUD"];

/// SWIFT code of DBS Bank (Hong Kong), the ACT clearing bank.
pub const DBS_HK_CODE: &str = "DHBKHKHHXXX";

/// Largest CNH amount still eligible for FPS. Anything above goes RTGS.
pub const CNH_FPS_LIMIT: Decimal = dec!(5000000);

/// Currencies accepted for on-behalf-of payments into Hong Kong.
pub const POBO_CURRENCIES: &[&str] = &[HKD, USD, EUR, CNH];

/// Currencies RTGS carries for SWIFT transfers inside Hong Kong.
pub const RTGS_SWIFT_CURRENCIES: &[&str] = &[USD, CNH, HKD, EUR];

/// Currencies RTGS carries for non-SWIFT transfers regardless of amount.
pub const RTGS_LOCAL_CURRENCIES: &[&str] = &[USD, EUR];

/// Currencies a non-DBS Hong-Kong transfer may use without falling to TT.
pub const DOMESTIC_CURRENCIES: &[&str] = &[USD, HKD, CNH];

pub fn is_recognized_currency(currency: &str) -> bool {
    CURRENCIES.contains(&currency)
}

pub fn is_recognized_country(country: &str) -> bool {
    COUNTRIES.contains(&country)
}
