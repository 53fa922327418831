use clap::Parser;
use wff_check::{config::Config, normal_form::NormalForm};

/// Determines whether a propositional formula is well-formed, or is in a canonical normal form
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The formula to examine, read from standard input if absent
    pub formula: Option<String>,

    /// Check for a normal form, in place of recognising the formula
    #[arg(short, long, value_enum)]
    pub form: Option<NormalForm>,

    /// Require a well-formed formula before checking for a normal form
    #[arg(short, long, default_value_t = false)]
    pub strict: bool,

    /// Write the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Explain a negative report
    #[arg(short, long, default_value_t = false)]
    pub explain: bool,

    /// The longest formula to examine, in bytes
    #[arg(long)]
    pub max_input_length: Option<usize>,

    /// Increase log verbosity (requires the 'log' feature)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write help as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// The formula given as an argument, if any.
    pub formula: Option<String>,

    /// The normal form to check for, if any.
    pub form: Option<NormalForm>,

    /// Whether to write the report as JSON.
    pub json: bool,

    /// Whether to explain a negative report.
    pub explain: bool,

    /// Log verbosity.
    pub verbose: u8,
}

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Splits parsed arguments into a library [Config] and a [CliConfig].
///
/// Values outside the range of an option are an error.
pub fn configure(args: Args) -> Result<(Config, CliConfig), ConfigError> {
    let mut cfg = Config::default();

    cfg.strict_normal_form.value = args.strict;

    if let Some(length) = args.max_input_length {
        if !cfg.max_input_length.set(length) {
            let (min, max) = cfg.max_input_length.min_max();
            return Err(ConfigError::NonSpecific(format!(
                "{} requires a value between {min} and {max}",
                cfg.max_input_length.name
            )));
        }
    }

    let cli_options = CliConfig {
        formula: args.formula,
        form: args.form,
        json: args.json,
        explain: args.explain,
        verbose: args.verbose,
    };

    Ok((cfg, cli_options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("wff_cli").chain(args.iter().copied()))
            .expect("arguments")
    }

    #[test]
    fn defaults() {
        let (cfg, cli) = configure(parse(&["(A&B)"])).ok().expect("configuration");
        assert!(!cfg.strict_normal_form.value);
        assert_eq!(cli.formula.as_deref(), Some("(A&B)"));
        assert!(cli.form.is_none());
    }

    #[test]
    fn forms() {
        let (cfg, cli) = configure(parse(&["--form", "sknf", "--strict", "A"]))
            .ok()
            .expect("configuration");
        assert!(cfg.strict_normal_form.value);
        assert_eq!(cli.form, Some(NormalForm::SKNF));
    }

    #[test]
    fn bounded_length() {
        assert!(configure(parse(&["--max-input-length", "0", "A"])).is_err());
        assert!(configure(parse(&["--max-input-length", "8", "A"])).is_ok());
    }

    #[test]
    fn verbosity_counts() {
        let (_, cli) = configure(parse(&["-vv"])).ok().expect("configuration");
        assert_eq!(cli.verbose, 2);
        assert!(cli.formula.is_none());
    }
}
