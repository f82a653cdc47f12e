use serde::{Deserialize, Serialize};
use std::fmt;

/// A named boolean fact recorded to explain a step's outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub label: String,
    pub met: bool,
}

impl Condition {
    pub fn new(label: impl Into<String>, met: bool) -> Self {
        Self {
            label: label.into(),
            met,
        }
    }
}

/// One entry of the routing trace.
///
/// All-of steps fill `conditions`, any-of steps fill `scenarios`. A step that
/// never ran because the eligibility gate failed has `skipped` set and a
/// `reason` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    pub name: String,
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<Condition>>,
}

impl StepResult {
    /// Passes when every condition is met.
    pub fn all_of(name: impl Into<String>, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            passed: conditions.iter().all(|c| c.met),
            skipped: None,
            reason: None,
            conditions: Some(conditions),
            scenarios: None,
        }
    }

    /// Passes when at least one scenario holds.
    pub fn any_of(name: impl Into<String>, scenarios: Vec<Condition>) -> Self {
        Self {
            name: name.into(),
            passed: scenarios.iter().any(|c| c.met),
            skipped: None,
            reason: None,
            conditions: None,
            scenarios: Some(scenarios),
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            skipped: Some(true),
            reason: Some(reason.into()),
            conditions: None,
            scenarios: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.unwrap_or(false)
    }
}

/// Settlement rail chosen for a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Route {
    Fps,
    Act,
    Rtgs,
    Tt,
    /// No rail matched.
    Unknown,
}

impl Route {
    pub const RAILS: [Route; 4] = [Route::Fps, Route::Act, Route::Rtgs, Route::Tt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Fps => "FPS",
            Route::Act => "ACT",
            Route::Rtgs => "RTGS",
            Route::Tt => "TT",
            Route::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict plus the ordered trace of every step that was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    pub route: Route,
    pub steps: Vec<StepResult>,
}

impl RouteResult {
    pub fn new(route: Route, steps: Vec<StepResult>) -> Self {
        Self { route, steps }
    }

    /// The step whose name matches the verdict, if any.
    pub fn matched_step(&self) -> Option<&StepResult> {
        self.steps
            .iter()
            .find(|s| s.passed && s.name == self.route.as_str())
    }

    pub fn step(&self, name: &str) -> Option<&StepResult> {
        self.steps.iter().find(|s| s.name == name)
    }
}
