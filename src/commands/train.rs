//! Train command handler - fit or update the model bundle

use tracing::info;

use crate::cli::{OutputFormat, TrainArgs};
use crate::commands::{to_json, CommandContext};
use crate::dataset::read_dataset;
use crate::error::{RecognizerError, Result};
use crate::model::ModelBundle;
use crate::train::Trainer;

/// Run the train command
pub fn run_train(args: &TrainArgs, ctx: &CommandContext) -> Result<String> {
    let dataset_path = args
        .dataset
        .clone()
        .unwrap_or_else(|| ctx.config.dataset.output.clone());
    let model_path = ctx.model_path(args.model.as_ref());

    let mut policy = ctx.config.training.policy();
    if let Some(n) = args.initial_iter {
        policy.initial_iter = n;
    }
    if let Some(n) = args.max_total_iter {
        policy.max_total_iter = n;
    }
    if policy.initial_iter == 0 {
        return Err(RecognizerError::ConfigError {
            message: "initial_iter must be positive".to_string(),
        });
    }

    let examples = read_dataset(&dataset_path)?;
    info!(
        "Loaded {} examples from {}",
        examples.len(),
        dataset_path.display()
    );

    let existing = if !args.fresh && model_path.exists() {
        Some(ModelBundle::load(&model_path)?)
    } else {
        None
    };

    let (bundle, report) = Trainer::new(policy).train(&examples, existing)?;
    bundle.save(&model_path)?;

    match ctx.format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "model": model_path.display().to_string(),
            "report": report,
        })),
        OutputFormat::Text => {
            let mut output = format!(
                "{} model at {}\nexamples: {}\nvocabulary: {}\ntags: {}\n",
                if report.incremental { "Updated" } else { "Trained" },
                model_path.display(),
                report.examples,
                report.vocabulary_size,
                report.tags.len()
            );
            if ctx.verbose {
                output.push_str(&format!("tag set: [{}]\n", report.tags.join(", ")));
            }
            for warning in &report.warnings {
                output.push_str(&format!("warning: {}\n", warning));
            }
            Ok(output)
        }
    }
}
