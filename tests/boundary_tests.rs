use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use payroute::{Route, evaluate};
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cnh_threshold_through_cli() {
    let file = common::requests_csv(&[
        "LOCAL,HKG,CNH,,5000000,false",
        "LOCAL,HKG,CNH,,5000000.0000,false",
        "LOCAL,HKG,CNH,,5000001,false",
    ])
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("payroute"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("LOCAL,HKG,CNH,,5000000,false,FPS"))
        .stdout(predicate::str::contains("LOCAL,HKG,CNH,,5000001,false,RTGS"))
        .stdout(predicate::str::contains(",RTGS").count(1));
}

#[test]
fn test_fractional_amounts_around_threshold() {
    let just_below = evaluate(&common::request("LOCAL", "HKG", "CNH", "", "4999999.9999", false));
    assert_eq!(just_below.route, Route::Fps);

    let just_above = evaluate(&common::request("LOCAL", "HKG", "CNH", "", "5000000.0001", false));
    assert_eq!(just_above.route, Route::Rtgs);
}

#[test]
fn test_threshold_only_applies_to_cnh() {
    let hkd = evaluate(&common::request("LOCAL", "HKG", "HKD", "", "90000000", false));
    assert_eq!(hkd.route, Route::Fps);

    let usd = evaluate(&common::request("LOCAL", "HKG", "USD", "", "1", false));
    assert_eq!(usd.route, Route::Rtgs);
}

#[test]
fn test_zero_and_negative_cnh_amounts_go_fps() {
    for amount in ["0", "-1", "-5000001"] {
        let result = evaluate(&common::request("LOCAL", "HKG", "CNH", "", amount, false));
        assert_eq!(result.route, Route::Fps, "amount {amount}");
    }
}
