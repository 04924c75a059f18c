//! Scan command handler - extract functions and predict their tags

use tracing::info;

use crate::cli::{OutputFormat, ScanArgs};
use crate::commands::{load_source, to_json, CommandContext};
use crate::error::Result;
use crate::model::ModelBundle;
use crate::pipeline::Pipeline;
use crate::report;

/// Run the scan command
pub fn run_scan(args: &ScanArgs, ctx: &CommandContext) -> Result<String> {
    let document = load_source(&args.source)?;
    let bundle = ModelBundle::load(&ctx.model_path(args.model.as_ref()))?;

    let annotated = Pipeline::new(&bundle).run(&document)?;
    info!(
        "Annotated {} functions from {}",
        annotated.len(),
        document.identifier
    );

    match ctx.format {
        OutputFormat::Json => to_json(&annotated),
        OutputFormat::Text => Ok(report::render_text(&annotated, args.all)),
    }
}
