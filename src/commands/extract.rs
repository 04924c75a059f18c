//! Extract command handler - function boundaries without classification

use crate::cli::{ExtractArgs, OutputFormat};
use crate::commands::{load_source, to_json, CommandContext};
use crate::error::Result;
use crate::extract::extract;
use crate::lang::{Lang, Strategy};

/// Run the extract command
pub fn run_extract(args: &ExtractArgs, ctx: &CommandContext) -> Result<String> {
    let document = load_source(&args.source)?;
    let functions = extract(&document)?;

    if ctx.format == OutputFormat::Json {
        return to_json(&functions);
    }

    let mut output = String::new();
    if ctx.verbose {
        output.push_str(&format!(
            "source: {}\nlanguage: {}\nstrategy: {}\n\n",
            document.identifier,
            document.language.as_ref().map_or("unknown", Lang::name),
            Strategy::for_document(&document).name()
        ));
    }

    if functions.is_empty() {
        output.push_str("No functions detected.\n");
        return Ok(output);
    }

    for function in &functions {
        output.push_str(&format!(
            "{}-{}\t{}({})\n",
            function.start_line,
            function.end_line,
            function.name,
            function.params.as_deref().unwrap_or("")
        ));
    }
    Ok(output)
}
