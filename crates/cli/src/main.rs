//! Stockbench CLI — single-shot benchmark runs from the command line.
//!
//! ```bash
//! stockbench compare --stock 100 --quantity 1 --workers 50
//! stockbench optimistic --stock 10 --workers 50 --json
//! ```

mod format;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::process;
use std::time::Duration;
use stockbench::prelude::*;

use format::{print_comparison, print_result, OutputMode};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match run(&matches, output_mode) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("stockbench")
        .about("Optimistic vs pessimistic concurrency control benchmark")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log worker-level detail"),
        )
        .subcommand(workload_args(
            Command::new("optimistic").about("Run the version-stamped retry strategy"),
        ))
        .subcommand(workload_args(
            Command::new("pessimistic").about("Run the exclusive-lock strategy"),
        ))
        .subcommand(workload_args(
            Command::new("compare").about("Run both strategies and pick a winner"),
        ))
}

fn workload_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("stock")
            .long("stock")
            .value_parser(value_parser!(u32))
            .default_value("100")
            .help("Initial stock for the record"),
    )
    .arg(
        Arg::new("quantity")
            .long("quantity")
            .value_parser(value_parser!(u32))
            .default_value("1")
            .help("Units each worker removes"),
    )
    .arg(
        Arg::new("workers")
            .long("workers")
            .value_parser(value_parser!(usize))
            .default_value("50")
            .help("Concurrent workers, one decrement each"),
    )
    .arg(
        Arg::new("max-attempts")
            .long("max-attempts")
            .value_parser(value_parser!(u32))
            .default_value("5")
            .help("Optimistic write-attempt budget"),
    )
    .arg(
        Arg::new("backoff-ms")
            .long("backoff-ms")
            .value_parser(value_parser!(u64))
            .default_value("100")
            .help("Fixed sleep between optimistic attempts"),
    )
    .arg(
        Arg::new("timeout-secs")
            .long("timeout-secs")
            .value_parser(value_parser!(u64))
            .help("Deadline for worker completion (default: wait forever)"),
    )
}

fn run(matches: &ArgMatches, output_mode: OutputMode) -> Result<()> {
    let (name, sub) = matches
        .subcommand()
        .expect("subcommand_required is set");

    let stock = *sub.get_one::<u32>("stock").expect("defaulted");
    let quantity = *sub.get_one::<u32>("quantity").expect("defaulted");
    let workers = *sub.get_one::<usize>("workers").expect("defaulted");

    let mut builder = StockBench::builder()
        .max_attempts(*sub.get_one::<u32>("max-attempts").expect("defaulted"))
        .backoff(Duration::from_millis(
            *sub.get_one::<u64>("backoff-ms").expect("defaulted"),
        ));
    if let Some(secs) = sub.get_one::<u64>("timeout-secs") {
        builder = builder.harness_timeout(Duration::from_secs(*secs));
    }
    let bench = builder.build();

    match name {
        "optimistic" => {
            let item = bench.initialize("optimistic-lock-test", stock);
            let result = bench.run_optimistic(item.id, quantity, workers)?;
            print_result(&result, output_mode);
        }
        "pessimistic" => {
            let item = bench.initialize("pessimistic-lock-test", stock);
            let result = bench.run_pessimistic(item.id, quantity, workers)?;
            print_result(&result, output_mode);
        }
        "compare" => {
            let comparison = bench.compare(stock, quantity, workers)?;
            print_comparison(&comparison, output_mode);
        }
        other => unreachable!("unknown subcommand {other}"),
    }
    Ok(())
}
