// ============================================================
// File: main.rs
// Date: Oct. 16, 2026
//
// Description:
//   Entry point for the B+Tree benchmark. Parses the command
//   line, installs the stderr logger, builds and queries one
//   tree (and, with --baseline, a std BTreeMap), and prints the
//   report to stdout (text or JSON).
//
//   With no arguments it runs the reference workload:
//     1,000,000 sequential keys, 500,000 seeded queries, order 32.
// ============================================================
use std::process::ExitCode;

use clap::Parser;

use btree_bench::bench::report;
use btree_bench::{logging, run_report, BenchConfig, Result};


fn main() -> ExitCode {
    let config = BenchConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}


fn run(config: &BenchConfig) -> Result<()> {
    config.validate()?;
    logging::init_logging(config.log_level_filter()?)?;

    if !config.json {
        report::print_header(">>> Benchmark Started <<<");
    }

    let results = run_report(config)?;

    if config.json {
        println!("{}", results.to_json()?);
    } else {
        results.print();
    }
    Ok(())
}
