//! Launch command implementation

use super::Context;
use crate::cli::LaunchArgs;
use crate::error::Result;
use crate::launch;
use crate::report::Report;

/// Run the launch.json checks
pub fn run(ctx: &Context, args: LaunchArgs) -> Result<()> {
    let mut report = Report::default();
    report.push(launch::run_suite(
        &ctx.root,
        &ctx.config.launch,
        args.file.as_deref(),
    ));
    report.finish(ctx.format)
}
