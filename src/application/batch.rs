use super::engine::evaluate;
use crate::domain::ports::RouteSink;
use crate::domain::request::PaymentRequest;
use crate::domain::trace::Route;
use crate::domain::vocab::{is_recognized_country, is_recognized_currency};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Counts of verdicts produced by a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteTally {
    pub routes: BTreeMap<Route, usize>,
    /// Rows that could not be read and were left out.
    pub skipped_rows: usize,
}

impl RouteTally {
    pub fn count(&self, route: Route) -> usize {
        self.routes.get(&route).copied().unwrap_or(0)
    }

    pub fn routed(&self) -> usize {
        self.routes.values().sum()
    }
}

/// Evaluates every readable request and hands the result to `sink`.
///
/// Unreadable rows are logged and skipped. Errors from the sink abort the run.
pub fn route_all<I>(requests: I, sink: &mut dyn RouteSink) -> Result<RouteTally>
where
    I: IntoIterator<Item = Result<PaymentRequest>>,
{
    let mut tally = RouteTally::default();

    for (row, item) in requests.into_iter().enumerate() {
        match item {
            Ok(request) => {
                if !is_recognized_currency(&request.currency)
                    || !is_recognized_country(&request.country)
                {
                    debug!(
                        row = row + 1,
                        country = %request.country,
                        currency = %request.currency,
                        "request outside the known vocabulary"
                    );
                }
                let result = evaluate(&request);
                sink.write(&request, &result)?;
                *tally.routes.entry(result.route).or_default() += 1;
            }
            Err(e) => {
                warn!(row = row + 1, error = %e, "skipping unreadable request row");
                tally.skipped_rows += 1;
            }
        }
    }

    sink.finish()?;

    info!(
        routed = tally.routed(),
        skipped = tally.skipped_rows,
        fps = tally.count(Route::Fps),
        act = tally.count(Route::Act),
        rtgs = tally.count(Route::Rtgs),
        tt = tally.count(Route::Tt),
        unknown = tally.count(Route::Unknown),
        "batch routed"
    );

    Ok(tally)
}
