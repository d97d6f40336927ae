use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use exprtree::{ParseSettings, parse_with_settings};

const PARSE_ERROR: u8 = 65;

#[derive(Debug, Parser)]
#[clap(name = "exprtree", version)]
pub struct CLArgs {
    /// The expression to parse, e.g. "2*x + 3*y".
    pub expression: String,

    /// Print the tree as parsed, before same-operator chains are merged.
    #[clap(long)]
    pub no_flatten: bool,

    #[clap(long, value_enum, default_value_t = OutputFormat::Debug)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One node label per line, indented by depth.
    Debug,
    /// The expression text, rebuilt from the tree.
    Display,
}

fn main() -> ExitCode {
    let args = CLArgs::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(EnvFilter::from_default_env())
        .init();

    let settings = ParseSettings { flatten: !args.no_flatten };
    let expression = match parse_with_settings(&args.expression, &settings) {
        Ok(expression) => expression,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::from(PARSE_ERROR);
        }
    };

    match args.format {
        OutputFormat::Debug => print!("{}", expression.to_debug_string()),
        OutputFormat::Display => println!("{expression}"),
    }
    ExitCode::SUCCESS
}
