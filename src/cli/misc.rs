use std::io::{BufRead, IsTerminal, Write};

use crossterm::style::Stylize;
use wff_check::reports::Report;

use crate::config::CliConfig;

/// The formula given as an argument, or otherwise a line read from standard input.
pub fn read_formula(cli_options: &mut CliConfig) -> std::io::Result<String> {
    if let Some(formula) = cli_options.formula.take() {
        return Ok(formula);
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        println!("Enter formula:");
    }

    let mut buffer = String::default();
    stdin.lock().read_line(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

/// Writes the report, as JSON if requested and otherwise as a line coloured when written to a terminal.
pub fn write_report(report: &Report, cli_options: &CliConfig) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();

    if cli_options.json {
        let json = serde_json::to_string(report).map_err(std::io::Error::other)?;
        return writeln!(stdout, "{json}");
    }

    let line = report.to_string();
    match (stdout.is_terminal(), report.is_positive()) {
        (true, true) => writeln!(stdout, "{}", line.as_str().green())?,
        (true, false) => writeln!(stdout, "{}", line.as_str().red())?,
        (false, _) => writeln!(stdout, "{line}")?,
    }

    if cli_options.explain {
        if let Some(reason) = report.reason() {
            writeln!(stdout, "{reason}")?;
        }
    }

    Ok(())
}

/// Installs a console logger at a level given by the count of verbose flags.
#[cfg(feature = "log")]
pub fn init_logging(verbose: u8) {
    use log::LevelFilter;
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to initialise logging: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logging: {e}"),
    }
}

#[cfg(not(feature = "log"))]
pub fn init_logging(verbose: u8) {
    if verbose > 0 {
        eprintln!("Logs require the 'log' feature");
    }
}
