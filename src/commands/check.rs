//! Check command implementation: every suite in one report

use super::Context;
use crate::error::Result;
use crate::report::Report;
use crate::{launch, rules};

/// Run all check suites
pub fn run(ctx: &Context) -> Result<()> {
    let mut report = Report::default();
    report.push(launch::run_suite(&ctx.root, &ctx.config.launch, None));
    report.push(rules::run_suite(&ctx.root, &ctx.config.rules, None));
    report.finish(ctx.format)
}
