//! Rules command implementation

use super::Context;
use crate::cli::RulesArgs;
use crate::error::Result;
use crate::report::Report;
use crate::rules;

/// Run the rules document checks
pub fn run(ctx: &Context, args: RulesArgs) -> Result<()> {
    let mut report = Report::default();
    report.push(rules::run_suite(
        &ctx.root,
        &ctx.config.rules,
        args.file.as_deref(),
    ));
    report.finish(ctx.format)
}
