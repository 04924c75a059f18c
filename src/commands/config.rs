//! Config command handler - show and edit the configuration file

use crate::cli::{ConfigArgs, ConfigOperation};
use crate::commands::CommandContext;
use crate::config::RecognizerConfig;
use crate::error::{RecognizerError, Result};

/// Run the config command
pub fn run_config(args: &ConfigArgs, ctx: &CommandContext) -> Result<String> {
    match &args.operation {
        ConfigOperation::Show => {
            let mut output = String::new();
            if let Some(path) = &ctx.config_path {
                output.push_str(&format!("# {}\n", path.display()));
            }
            output.push_str(&ctx.config.display()?);
            Ok(output)
        }
        ConfigOperation::Get { key } => ctx
            .config
            .get(key)
            .map(|value| format!("{}\n", value))
            .ok_or_else(|| RecognizerError::ConfigError {
                message: format!("Unknown configuration key: {}", key),
            }),
        ConfigOperation::Set { key, value } => {
            let path = writable_path(ctx)?;
            let mut config = ctx.config.clone();
            config.set(key, value)?;
            config.save_to(&path)?;
            Ok(format!("Set {} = {}\n", key, value))
        }
        ConfigOperation::Reset => {
            let path = writable_path(ctx)?;
            RecognizerConfig::default().save_to(&path)?;
            Ok("Configuration reset to defaults\n".to_string())
        }
    }
}

fn writable_path(ctx: &CommandContext) -> Result<std::path::PathBuf> {
    ctx.config_path
        .clone()
        .ok_or_else(|| RecognizerError::ConfigError {
            message: "No configuration directory available; pass --config".to_string(),
        })
}
