//! Output formatting for CLI commands.

use serde::Serialize;

use crate::analysis::factory::ComponentInfo;
use crate::analysis::token::Token;
use crate::cli::args::{FalxArgs, OutputFormat};
use crate::error::Result;

/// Tokens produced by one `analyze` run.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub analyzer: String,
    pub tokens: Vec<Token>,
}

/// Registered components, as listed by `components`.
#[derive(Debug, Serialize)]
pub struct ComponentListing {
    pub components: Vec<ComponentInfo>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self, out: &mut String);
}

impl HumanOutput for AnalysisResult {
    fn render_human(&self, out: &mut String) {
        for token in &self.tokens {
            out.push_str(&format!(
                "{:>5}  {:>6}..{:<6}  {}\n",
                token.position, token.start_offset, token.end_offset, token.text
            ));
        }
    }
}

impl HumanOutput for ComponentListing {
    fn render_human(&self, out: &mut String) {
        for info in &self.components {
            let mut name = info.name.to_string();
            if !info.aliases.is_empty() {
                name.push_str(&format!(" ({})", info.aliases.join(", ")));
            }
            let options = if info.options.is_empty() {
                "-".to_string()
            } else {
                info.options.join(", ")
            };
            out.push_str(&format!("{:<10} {:<24} {}\n", info.kind, name, options));
        }
    }
}

/// Render `result` in the format selected on the command line.
pub fn render<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FalxArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => {
            let mut out = String::new();
            if args.verbosity() > 1 {
                out.push_str(message);
                out.push_str("\n\n");
            }
            result.render_human(&mut out);
            Ok(out)
        }
        OutputFormat::Json => {
            let mut json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            json.push('\n');
            Ok(json)
        }
    }
}

/// Print `result` to stdout.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &FalxArgs,
) -> Result<()> {
    print!("{}", render(message, result, args)?);
    Ok(())
}
