//! Check outcomes and their rendering
//!
//! Each suite produces a [`SuiteReport`]; a run collects them into a
//! [`Report`] which is printed as coloured text or as JSON.

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::error::{Result, check as check_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

/// Result of one named check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub id: &'static str,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn pass(id: &'static str) -> Self {
        Self {
            id,
            status: Status::Pass,
            message: None,
        }
    }

    pub fn fail(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            status: Status::Fail,
            message: Some(message.into()),
        }
    }

    /// Turn a check function's result into an outcome
    pub fn from_result(id: &'static str, result: std::result::Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::pass(id),
            Err(message) => Self::fail(id, message),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Outcomes of one suite against one file
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub suite: &'static str,
    /// The file the suite ran against, when one was located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub checks: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn failed(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed()).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A full run: one or more suites
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub suites: Vec<SuiteReport>,
}

impl Report {
    pub fn push(&mut self, suite: SuiteReport) {
        tracing::info!(
            "{} suite: {} checks, {} failed",
            suite.suite,
            suite.checks.len(),
            suite.failed()
        );
        self.suites.push(suite);
    }

    pub fn total(&self) -> usize {
        self.suites.iter().map(|s| s.checks.len()).sum()
    }

    pub fn failed(&self) -> usize {
        self.suites.iter().map(SuiteReport::failed).sum()
    }

    /// Render the report as human-readable text
    pub fn to_text(&self) -> String {
        let bold = Style::new().bold();
        let green = Style::new().green();
        let red = Style::new().red().bold();
        let dim = Style::new().dim();

        let mut out = String::new();
        for suite in &self.suites {
            let file = suite
                .file
                .as_ref()
                .map_or_else(|| "(not located)".to_string(), |p| p.display().to_string());
            out.push_str(&format!(
                "{} {}\n",
                bold.apply_to(suite.suite),
                dim.apply_to(file)
            ));
            for check in &suite.checks {
                match (&check.status, &check.message) {
                    (Status::Pass, _) => {
                        out.push_str(&format!("  {} {}\n", green.apply_to("ok  "), check.id));
                    }
                    (Status::Fail, message) => out.push_str(&format!(
                        "  {} {}: {}\n",
                        red.apply_to("FAIL"),
                        check.id,
                        message.as_deref().unwrap_or("failed")
                    )),
                }
            }
        }

        let summary = format!("{} checks, {} failed", self.total(), self.failed());
        if self.failed() == 0 {
            out.push_str(&format!("{}\n", green.apply_to(summary)));
        } else {
            out.push_str(&format!("{}\n", red.apply_to(summary)));
        }
        out
    }

    /// Render the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the report and turn any failure into an error
    pub fn finish(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => print!("{}", self.to_text()),
            OutputFormat::Json => println!("{}", self.to_json()?),
        }
        match self.failed() {
            0 => Ok(()),
            failed => Err(check_error::failed(failed, self.total())),
        }
    }
}
