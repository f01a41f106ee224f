use std::process::ExitCode;

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use clap::Parser as ClapParser;
use hyproto_calc::{CalcError, Env, calculate, parse_binding};
use log::{LevelFilter, info};

#[derive(ClapParser)]
#[command(about = "Evaluate an arithmetic expression")]
pub struct Arguments {
    /// Expression to evaluate, e.g. "1 + x * 2"
    expression: String,

    /// Bind a variable, e.g. --var x=3 (repeatable)
    #[arg(short = 'D', long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn report(source: &str, error: &CalcError) {
    let CalcError::Parse { diagnostics } = error else {
        eprintln!("Error: {error}");
        return;
    };

    let mut colors = ColorGenerator::new();
    let color = colors.next();
    for diagnostic in diagnostics {
        let span = ("<expression>", diagnostic.span.clone());
        let printed = Report::build(ReportKind::Error, span.clone())
            .with_message(&diagnostic.message)
            .with_label(
                Label::new(span)
                    .with_message("The error occurred here")
                    .with_color(color),
            )
            .finish()
            .eprint(("<expression>", Source::from(source)));
        if let Err(e) = printed {
            eprintln!("Error: {} ({e})", diagnostic.message);
        }
    }
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose);

    let mut env = Env::new();
    for binding in &args.vars {
        match parse_binding(binding) {
            Ok((name, value)) => {
                info!("binding {name} = {value}");
                env.insert(name, value);
            }
            Err(error) => {
                eprintln!("Error: {error}");
                return ExitCode::FAILURE;
            }
        }
    }

    match calculate(&args.expression, &env) {
        Ok(evaluation) => {
            info!(
                "visited {} node(s), {} builtin call(s)",
                evaluation.visited, evaluation.builtin_calls
            );
            println!("{}", evaluation.value);
            ExitCode::SUCCESS
        }
        Err(error) => {
            report(&args.expression, &error);
            ExitCode::FAILURE
        }
    }
}
