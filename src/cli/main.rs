#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use config::{configure, Args};
use misc::{init_logging, read_formula, write_report};
use wff_check::reports::Report;

mod config;
mod misc;

fn main() {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    let (cfg, mut cli_options) = match configure(args) {
        Ok(configuration) => configuration,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    init_logging(cli_options.verbose);

    let formula = match read_formula(&mut cli_options) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("Failed to read formula: {e}");
            std::process::exit(2);
        }
    };

    if formula.len() > cfg.max_input_length.value {
        eprintln!(
            "Formula of {} bytes exceeds {} of {}",
            formula.len(),
            cfg.max_input_length.name,
            cfg.max_input_length.value
        );
        std::process::exit(2);
    }

    let report = match cli_options.form {
        None => Report::recognition(&formula),
        Some(form) => Report::normal_form(&formula, form, &cfg),
    };

    log::info!("{report:?}");

    if let Err(e) = write_report(&report, &cli_options) {
        eprintln!("Failed to write report: {e}");
        std::process::exit(2);
    }

    let code = match report {
        Report::LexFailure(_) => 2,
        _ if report.is_positive() => 0,
        _ => 1,
    };
    std::process::exit(code);
}
