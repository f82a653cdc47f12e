use payroute::application::rules::GATE_NAME;
use payroute::{PaymentMethod, PaymentRequest, Route, evaluate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const METHODS: &[&str] = &["LOCAL", "SWIFT", "UNSPECIFIED", "local", "WIRE", ""];
const COUNTRIES: &[&str] = &["HKG", "USA", "hkg", "OTHER", ""];
const CURRENCIES: &[&str] = &["HKD", "USD", "EUR", "CNH", "GBP", "JPY", "hkd", ""];
const BANKS: &[&str] = &[
    "",
    "   ",
    "DHBKHKHHXXX",
    " dhbkhkhhxxx ",
    "OTHERBANKXXX",
    "hsbchkhhhkh",
];
const AMOUNTS: &[i64] = &[-1, 0, 1000, 4_999_999, 5_000_000, 5_000_001, 90_000_000];

const SAMPLES: usize = 2000;

fn random_request(rng: &mut StdRng) -> PaymentRequest {
    PaymentRequest {
        method: PaymentMethod::from(*METHODS.choose(rng).unwrap()),
        country: COUNTRIES.choose(rng).unwrap().to_string(),
        currency: CURRENCIES.choose(rng).unwrap().to_string(),
        bank_identifier: BANKS.choose(rng).unwrap().to_string(),
        amount: Decimal::from(*AMOUNTS.choose(rng).unwrap()),
        pay_on_behalf_of: rng.gen_bool(0.3),
    }
}

fn for_each_sample(seed: u64, mut check: impl FnMut(&PaymentRequest)) {
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..SAMPLES {
        check(&random_request(&mut rng));
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    for_each_sample(7, |request| {
        assert_eq!(evaluate(request), evaluate(&request.clone()));
    });
}

#[test]
fn test_single_verdict() {
    for_each_sample(11, |request| {
        let result = evaluate(request);
        let rails_passed: Vec<&str> = result.steps[1..]
            .iter()
            .filter(|s| s.passed)
            .map(|s| s.name.as_str())
            .collect();

        match result.route {
            Route::Unknown => assert!(rails_passed.is_empty(), "{request:?}"),
            route => assert_eq!(rails_passed, vec![route.as_str()], "{request:?}"),
        }
    });
}

#[test]
fn test_verdict_is_the_last_step() {
    for_each_sample(13, |request| {
        let result = evaluate(request);
        let last = result.steps.last().unwrap();
        if result.route == Route::Unknown {
            assert_eq!(last.name, "TT");
            assert!(!last.passed);
        } else {
            assert_eq!(last.name, result.route.as_str());
            assert!(last.passed);
        }
    });
}

#[test]
fn test_steps_follow_the_fixed_order() {
    for_each_sample(17, |request| {
        let result = evaluate(request);
        let names: Vec<&str> = result.steps.iter().map(|s| s.name.as_str()).collect();
        let full = [GATE_NAME, "FPS", "ACT", "RTGS", "TT"];

        assert_eq!(names[0], GATE_NAME);
        assert!(names.len() >= 2 && names.len() <= full.len());
        assert_eq!(names[..], full[..names.len()], "{request:?}");
    });
}

#[test]
fn test_skip_consistency() {
    for_each_sample(19, |request| {
        let result = evaluate(request);
        let gate = &result.steps[0];
        assert!(!gate.is_skipped());

        if gate.passed {
            assert!(result.steps.iter().all(|s| !s.is_skipped()), "{request:?}");
        } else {
            assert_eq!(result.steps.len(), 5);
            assert!(result.steps[1..4].iter().all(|s| s.is_skipped() && !s.passed));
            assert!(!result.steps[4].is_skipped());
            assert!(matches!(result.route, Route::Tt | Route::Unknown));
        }
    });
}

#[test]
fn test_evaluated_steps_list_their_facts() {
    for_each_sample(23, |request| {
        let result = evaluate(request);
        for step in result.steps.iter().filter(|s| !s.is_skipped()) {
            let count = step
                .conditions
                .as_ref()
                .or(step.scenarios.as_ref())
                .map(Vec::len);
            let expected = match step.name.as_str() {
                "FPS" | "TT" => 5,
                "ACT" | "RTGS" => 3,
                _ => 2,
            };
            assert_eq!(count, Some(expected), "{}", step.name);
        }
    });
}

#[test]
fn test_known_methods_never_reach_unknown() {
    for_each_sample(29, |request| {
        if request.method.is_recognized() {
            assert_ne!(evaluate(request).route, Route::Unknown, "{request:?}");
        }
    });
}
