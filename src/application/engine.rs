use super::rules::{self, RuleContext};
use crate::domain::request::PaymentRequest;
use crate::domain::trace::{Route, RouteResult, StepResult};
use tracing::debug;

/// Reason recorded on rails 1-3 when the eligibility gate fails.
pub const GATE_SKIP_REASON: &str = "Channel eligibility check failed";

type Rail = fn(&RuleContext<'_>) -> StepResult;

/// Gated rails in evaluation order. TT is the fallback and runs separately.
const PRIMARY_RAILS: [(Route, Rail); 3] = [
    (Route::Fps, rules::fps),
    (Route::Act, rules::act),
    (Route::Rtgs, rules::rtgs),
];

/// Selects the settlement rail for a payment and records why.
///
/// The eligibility gate decides whether FPS, ACT and RTGS are tried. Those
/// rails run in order and the first match ends evaluation; rails after it do
/// not appear in the trace. When the gate fails they are recorded as skipped.
/// TT runs whenever no primary rail matched, and if it fails too the verdict is
/// [`Route::Unknown`].
pub fn evaluate(request: &PaymentRequest) -> RouteResult {
    let ctx = RuleContext::new(request);

    let gate = rules::eligibility_gate(&ctx);
    let gate_passed = gate.passed;
    let mut steps = vec![gate];

    if gate_passed {
        for (route, rail) in PRIMARY_RAILS {
            let step = rail(&ctx);
            let matched = step.passed;
            steps.push(step);
            if matched {
                debug!(%route, "routing decision");
                return RouteResult::new(route, steps);
            }
        }
    } else {
        steps.extend(
            PRIMARY_RAILS
                .iter()
                .map(|(route, _)| StepResult::skipped(route.as_str(), GATE_SKIP_REASON)),
        );
    }

    let fallback = rules::tt(&ctx);
    let route = if fallback.passed {
        Route::Tt
    } else {
        Route::Unknown
    };
    steps.push(fallback);

    debug!(%route, gate_passed, "routing decision");
    RouteResult::new(route, steps)
}
