//! Predict command handler - classify a whole file as one snippet

use std::fs;

use crate::classifier::SnippetClassifier;
use crate::cli::{OutputFormat, PredictArgs};
use crate::commands::{to_json, CommandContext};
use crate::error::{RecognizerError, Result};
use crate::model::ModelBundle;

/// Run the predict command
pub fn run_predict(args: &PredictArgs, ctx: &CommandContext) -> Result<String> {
    if !args.file.is_file() {
        return Err(RecognizerError::FileNotFound {
            path: args.file.display().to_string(),
        });
    }
    let text = fs::read_to_string(&args.file)?;
    let bundle = ModelBundle::load(&ctx.model_path(args.model.as_ref()))?;

    let prediction = bundle.predict(&text);

    match ctx.format {
        OutputFormat::Json => to_json(&prediction),
        OutputFormat::Text => {
            let tags: Vec<&str> = prediction.tags.iter().map(String::as_str).collect();
            Ok(format!(
                "Predicted language: {}\nPredicted tags: [{}]\n",
                prediction.language,
                tags.join(", ")
            ))
        }
    }
}
