use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gmatrix::Grid;
use tracing::*;
use tracing_subscriber::EnvFilter;

const EMPTY_TOKEN: &str = "_";

/// Builds a grid of integers, applies writes and prints it.
#[derive(Parser, Debug)]
#[command(name = "gmatrix", version)]
struct Cli {
    #[command(subcommand)]
    source: Source,

    /// Write a slot before printing, as `X,Y=VALUE` (`_` empties the slot). Repeatable.
    #[arg(long = "set", value_name = "X,Y=VALUE", global = true)]
    writes: Vec<String>,

    /// Print `x y value` triples in iteration order instead of the grid.
    #[arg(long, global = true)]
    cells: bool,
}

#[derive(Subcommand, Debug)]
enum Source {
    /// Fill every slot with one value.
    Fill {
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        columns: usize,
        /// Initial value; every slot is empty when omitted.
        #[arg(long)]
        value: Option<i64>,
    },
    /// Build from a flat row-major list of slots.
    FromData {
        #[arg(long)]
        columns: usize,
        /// Slot values, `_` for an empty slot.
        #[arg(allow_negative_numbers = true)]
        slots: Vec<String>,
    },
}

/// Parses one slot token: `_` is an empty slot, anything else an integer.
fn parse_slot(token: &str) -> Result<Option<i64>> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }
    token
        .parse()
        .map(Some)
        .with_context(|| format!("Invalid slot value {token:?}"))
}

/// Parses an `X,Y=VALUE` write.
fn parse_write(arg: &str) -> Result<(usize, usize, Option<i64>)> {
    let Some((coordinates, value)) = arg.split_once('=') else {
        bail!("Write {arg:?} is missing '='");
    };
    let Some((x, y)) = coordinates.split_once(',') else {
        bail!("Write {arg:?} is missing ','");
    };
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("Invalid x in write {arg:?}"))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("Invalid y in write {arg:?}"))?;
    Ok((x, y, parse_slot(value.trim())?))
}

fn build_grid(source: &Source) -> Result<Grid<i64>> {
    match source {
        Source::Fill {
            rows,
            columns,
            value,
        } => Ok(Grid::filled(*value, *rows, *columns)),
        Source::FromData { columns, slots } => {
            let cells = slots
                .iter()
                .map(|token| parse_slot(token))
                .collect::<Result<Vec<_>>>()?;
            Grid::from_data(cells, *columns).context("Failed to build grid from data")
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let mut grid = build_grid(&cli.source)?;
    debug!("Built {}x{} grid", grid.rows(), grid.columns());

    for arg in &cli.writes {
        let (x, y, value) = parse_write(arg)?;
        grid.set(x, y, value)
            .with_context(|| format!("Failed to apply write {arg:?}"))?;
    }

    if cli.cells {
        let lines: Vec<String> = grid
            .iter()
            .map(|(x, y, value)| match value {
                Some(value) => format!("{x} {y} {value}"),
                None => format!("{x} {y} {EMPTY_TOKEN}"),
            })
            .collect();
        Ok(lines.join("\n"))
    } else {
        Ok(grid.to_string())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
