//! Command-line argument parsing.

use stocksim_runner::EngineVariant;

pub const USAGE: &str = "usage: stocksim <racy|locked> [--runs N] [--json]";

const DEFAULT_RUNS: u32 = 10;

/// Parsed invocation: which engine, how many runs, and whether to emit the
/// reports as JSON in addition to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    pub variant: EngineVariant,
    pub runs: u32,
    pub json: bool,
}

impl CliArgs {
    /// Parse from the arguments after the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut args = args.into_iter();

        let variant = args
            .next()
            .ok_or_else(|| "missing variant".to_string())?
            .parse::<EngineVariant>()?;

        let mut runs = DEFAULT_RUNS;
        let mut json = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--runs" => {
                    let value = args.next().ok_or_else(|| "--runs needs a value".to_string())?;
                    runs = value
                        .parse::<u32>()
                        .map_err(|e| format!("invalid --runs '{value}': {e}"))?;
                    if runs == 0 {
                        return Err("--runs must be at least 1".to_string());
                    }
                }
                "--json" => json = true,
                other => return Err(format!("unexpected argument '{other}'")),
            }
        }

        Ok(Self {
            variant,
            runs,
            json,
        })
    }
}
