use std::{io::IsTerminal, process::ExitCode};

use anyhow::{Context, Error};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tern_core::{Operator, TruthTable, Value};

const LOG_ENV: &str = "TERN_LOG";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply an operator to literal operands
    Eval {
        /// Operator to apply
        #[arg(ignore_case = true)]
        op: Operator,
        /// Operands (FALSE/-1, UNKNOWN/0, TRUE/1, any case)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Print the canonical form of each literal
    Parse {
        /// Literals to convert
        #[arg(required = true, allow_negative_numbers = true)]
        literals: Vec<String>,
    },
    /// Print the truth table of a unary or binary operator
    Table {
        /// Operator to tabulate
        #[arg(ignore_case = true)]
        op: Operator,
    },
}

#[derive(Serialize)]
struct Parsed<'a> {
    input: &'a str,
    value: Value,
    integer: i64,
}

#[derive(Serialize)]
struct Row {
    operands: Vec<Value>,
    result: Value,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn parse_value(input: &str) -> Result<Value, Error> {
    let value = input
        .parse::<Value>()
        .with_context(|| format!("failed to parse operand {input:?}"))?;
    tracing::debug!(input, %value, "parsed operand");
    Ok(value)
}

fn eval(args: &Args, op: Operator, inputs: &[String]) -> Result<(), Error> {
    let values = inputs
        .iter()
        .map(|s| parse_value(s))
        .collect::<Result<Vec<_>, _>>()?;
    let result = op.apply(&values)?;
    tracing::debug!(%op, operands = values.len(), %result, "evaluated");
    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn parse(args: &Args, inputs: &[String]) -> Result<(), Error> {
    let mut parsed = Vec::with_capacity(inputs.len());
    for input in inputs {
        let value = parse_value(input)?;
        parsed.push(Parsed {
            input,
            value,
            integer: value.to_i64(),
        });
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        for p in parsed {
            println!("{} => {} ({})", p.input, p.value, p.integer);
        }
    }
    Ok(())
}

fn table(args: &Args, op: Operator) -> Result<(), Error> {
    let table = TruthTable::new(op)
        .with_context(|| format!("{op} takes any number of operands and has no truth table"))?;
    if args.json {
        let rows: Vec<Row> = table
            .rows()
            .into_iter()
            .map(|(operands, result)| Row { operands, result })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{table}");
    }
    Ok(())
}

fn main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Command::Eval { op, values } => eval(&args, *op, values)?,
        Command::Parse { literals } => parse(&args, literals)?,
        Command::Table { op } => table(&args, *op)?,
    }

    Ok(ExitCode::SUCCESS)
}
