//! The eligibility gate and the four rail evaluators.
//!
//! Each evaluator computes every one of its conditions before deciding, so the
//! trace always shows the full picture even when the first condition fails.
//! Which evaluators run at all is decided by the cascade in
//! [`crate::application::engine`].

use crate::domain::request::{PaymentMethod, PaymentRequest};
use crate::domain::trace::{Condition, Route, StepResult};
use crate::domain::vocab::{
    CNH, CNH_FPS_LIMIT, DBS_HK_CODE, DOMESTIC_CURRENCIES, HK_COUNTRY, HKD, POBO_CURRENCIES,
    RTGS_LOCAL_CURRENCIES, RTGS_SWIFT_CURRENCIES,
};

pub const GATE_NAME: &str = "Channel Eligibility Check";

/// Request facts shared by all rules, with the bank identifier normalized once.
pub struct RuleContext<'a> {
    request: &'a PaymentRequest,
    bank_identifier: String,
}

impl<'a> RuleContext<'a> {
    pub fn new(request: &'a PaymentRequest) -> Self {
        Self {
            request,
            bank_identifier: request.normalized_bank_identifier(),
        }
    }

    fn is_swift(&self) -> bool {
        self.request.method == PaymentMethod::Swift
    }

    fn is_hong_kong(&self) -> bool {
        self.request.country == HK_COUNTRY
    }

    fn has_bank_identifier(&self) -> bool {
        !self.bank_identifier.is_empty()
    }

    fn is_dbs(&self) -> bool {
        self.bank_identifier == DBS_HK_CODE
    }

    fn currency_in(&self, set: &[&str]) -> bool {
        set.contains(&self.request.currency.as_str())
    }

    fn is_cnh(&self) -> bool {
        self.request.currency == CNH
    }

    fn pobo(&self) -> bool {
        self.request.pay_on_behalf_of
    }

    /// POBO into Hong Kong with a named bank and a supported currency.
    fn pobo_hong_kong(&self) -> bool {
        self.pobo()
            && self.has_bank_identifier()
            && self.is_hong_kong()
            && self.currency_in(POBO_CURRENCIES)
    }
}

pub fn eligibility_gate(ctx: &RuleContext<'_>) -> StepResult {
    StepResult::any_of(
        GATE_NAME,
        vec![
            Condition::new(
                "Method is LOCAL, SWIFT or UNSPECIFIED",
                ctx.request.method.is_recognized(),
            ),
            Condition::new(
                "On behalf of, bank code present, country HKG, currency HKD/USD/EUR/CNH",
                ctx.pobo_hong_kong(),
            ),
        ],
    )
}

pub fn fps(ctx: &RuleContext<'_>) -> StepResult {
    let currency_ok = ctx.request.currency == HKD
        || (ctx.is_cnh() && ctx.request.amount <= CNH_FPS_LIMIT);

    StepResult::all_of(
        Route::Fps.as_str(),
        vec![
            Condition::new("Method is not SWIFT", !ctx.is_swift()),
            Condition::new("Country is HKG", ctx.is_hong_kong()),
            Condition::new("Bank code is not DBS HK", !ctx.is_dbs()),
            Condition::new(
                "Currency is HKD, or CNH with amount <= 5,000,000",
                currency_ok,
            ),
            Condition::new("Not on behalf of", !ctx.pobo()),
        ],
    )
}

pub fn act(ctx: &RuleContext<'_>) -> StepResult {
    StepResult::all_of(
        Route::Act.as_str(),
        vec![
            Condition::new("Country is HKG", ctx.is_hong_kong()),
            Condition::new("Bank code is DBS HK", ctx.is_dbs()),
            Condition::new("Not on behalf of", !ctx.pobo()),
        ],
    )
}

pub fn rtgs(ctx: &RuleContext<'_>) -> StepResult {
    let hk_non_dbs = ctx.is_hong_kong() && !ctx.is_dbs();

    let swift_transfer =
        hk_non_dbs && ctx.is_swift() && ctx.currency_in(RTGS_SWIFT_CURRENCIES);

    let local_transfer = hk_non_dbs
        && !ctx.is_swift()
        && (ctx.currency_in(RTGS_LOCAL_CURRENCIES)
            || (ctx.is_cnh() && ctx.request.amount > CNH_FPS_LIMIT));

    StepResult::any_of(
        Route::Rtgs.as_str(),
        vec![
            Condition::new(
                "HKG, non-DBS bank, SWIFT, currency USD/CNH/HKD/EUR",
                swift_transfer,
            ),
            Condition::new(
                "HKG, non-DBS bank, not SWIFT, currency USD/EUR or CNH above 5,000,000",
                local_transfer,
            ),
            Condition::new(
                "On behalf of, bank code present, HKG, currency HKD/USD/EUR/CNH",
                ctx.pobo_hong_kong(),
            ),
        ],
    )
}

pub fn tt(ctx: &RuleContext<'_>) -> StepResult {
    StepResult::any_of(
        Route::Tt.as_str(),
        vec![
            Condition::new("Method is SWIFT", ctx.is_swift()),
            Condition::new(
                "Method is UNSPECIFIED",
                ctx.request.method == PaymentMethod::Unspecified,
            ),
            Condition::new("Country is not HKG", !ctx.is_hong_kong()),
            Condition::new(
                "HKG, non-DBS bank, currency not USD/HKD/CNH",
                ctx.is_hong_kong() && !ctx.is_dbs() && !ctx.currency_in(DOMESTIC_CURRENCIES),
            ),
            Condition::new("On behalf of", ctx.pobo()),
        ],
    )
}
