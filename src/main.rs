use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;

use segment_maze::{
    default_input,
    solutions::{build, format_answer, PARTS},
};

/// Larger compressed grids are only summarized by `--verbose`.
const MAX_PRINTED_CELLS: usize = 4096;

/// Shortest way through the maze traced by a line of turn-and-move instructions
#[derive(Debug, Parser)]
struct Args {
    /// The part to run, all of them if 0
    #[arg(short, long, default_value_t, value_parser = clap::value_parser!(u8).range(0..=3))]
    part: u8,

    /// Input variant, read from inputs/p<part>-<variant>.txt
    #[arg(short, long, default_value = "test")]
    variant: String,

    /// Also print the compressed grid
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let parts = match args.part {
        0 => 1..=PARTS,
        n => usize::from(n)..=usize::from(n),
    };

    let mut total = Duration::default();
    for part in parts {
        total += execute_part(part, &args)?;
    }
    println!("Total processing time: {}", format_duration(total));
    Ok(())
}

fn format_duration(dur: Duration) -> String {
    if dur.as_millis() != 0 {
        format!("{} ms", dur.as_millis())
    } else {
        format!("{} us", dur.as_micros())
    }
}

fn execute_part(n: usize, args: &Args) -> Result<Duration> {
    println!("Part {}:", n);
    let input = default_input(n, &args.variant)?;

    let start = Instant::now();
    let maze = build(&input)?;
    let answer = maze.shortest_path_to_end();
    let elapsed = start.elapsed();

    println!("  Answer: {}", format_answer(answer));
    println!("  Finished in {}", format_duration(elapsed));
    if args.verbose {
        let grid = maze.grid();
        println!("  {}x{} compressed cells", grid.width(), grid.height());
        if grid.len() <= MAX_PRINTED_CELLS {
            print!("{}", grid);
        }
    }
    println!("---------------------");
    Ok(elapsed)
}
