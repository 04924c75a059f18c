//! Dataset command handler - build the training set from a labelled tree

use crate::cli::{DatasetArgs, OutputFormat};
use crate::commands::{to_json, CommandContext};
use crate::dataset::{generate, write_dataset};
use crate::error::Result;

/// Run the dataset command
pub fn run_dataset(args: &DatasetArgs, ctx: &CommandContext) -> Result<String> {
    let root = args.root.clone().unwrap_or_else(|| ctx.config.dataset.root.clone());
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| ctx.config.dataset.output.clone());
    let extensions = if args.ext.is_empty() {
        ctx.config.dataset.extensions.clone()
    } else {
        args.ext.clone()
    };

    let examples = generate(&root, &extensions)?;
    let written = write_dataset(&output_path, &examples)?;

    match ctx.format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "root": root.display().to_string(),
            "output": output_path.display().to_string(),
            "examples": examples.len(),
            "written": written,
        })),
        OutputFormat::Text if written => Ok(format!(
            "Dataset generated with {} examples at {}\n",
            examples.len(),
            output_path.display()
        )),
        OutputFormat::Text => Ok(format!(
            "Dataset not generated: no .{} files under {}\n",
            extensions.join("/."),
            root.display()
        )),
    }
}
