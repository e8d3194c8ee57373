use std::fs;
use std::path::PathBuf;

use advent_2022::{
    day01, day02, day03, day04, day05, day06, day07, day08, day09, day10, day11, day12, day13,
    day14, day15, day16, day18, day19, day20, day21, day22, day23, day24, day25, Error,
};
use anyhow::{Context, Result};
use clap::Parser;

/// Advent of Code 2022 solution runner
#[derive(Parser, Debug)]
#[command(name = "advent-2022")]
struct Args {
    /// Puzzle day to run
    day: u8,

    /// Which part of the puzzle
    #[arg(short, long, default_value_t = 1)]
    part: u8,

    /// Puzzle input file
    #[arg(default_value = "input.txt")]
    input: PathBuf,
}

fn solve(day: u8, part: u8, input: &str) -> Result<String, Error> {
    let missing = Err(Error::NoSuchPart { day, part });
    Ok(match (day, part) {
        (1, 1) => day01::part1(input)?.to_string(),
        (2, 1) => day02::part1(input)?.to_string(),
        (3, 1) => day03::part1(input)?.to_string(),
        (4, 1) => day04::part1(input)?.to_string(),
        (4, 2) => day04::part2(input)?.to_string(),
        (5, 2) => day05::part2(input)?,
        (6, 1) => day06::part1(input)?.to_string(),
        (6, 2) => day06::part2(input)?.to_string(),
        (7, 1) => day07::part1(input)?.to_string(),
        (7, 2) => day07::part2(input)?.to_string(),
        (8, 1) => day08::part1(input)?.to_string(),
        (8, 2) => day08::part2(input)?.to_string(),
        (9, 1) => day09::part1(input)?.to_string(),
        (9, 2) => day09::part2(input)?.to_string(),
        (10, 2) => day10::part2(input)?,
        (11, 1) => day11::part1(input)?.to_string(),
        (11, 2) => day11::part2(input, 10_000)?.to_string(),
        (12, 1) => day12::part1(input)?.to_string(),
        (12, 2) => day12::part2(input)?.to_string(),
        (13, 1) => day13::part1(input)?.to_string(),
        (13, 2) => day13::part2(input)?.to_string(),
        (14, 2) => day14::part2(input)?.to_string(),
        (15, 2) => day15::part2(input, 4_000_000)?.to_string(),
        (16, 1) => day16::part1(input)?.to_string(),
        (16, 2) => day16::part2(input)?.to_string(),
        (18, 1) => day18::part1(input)?.to_string(),
        (18, 2) => day18::part2(input)?.to_string(),
        (19, 1) => day19::part1(input)?.to_string(),
        (19, 2) => day19::part2(input)?.to_string(),
        (20, 1) => day20::part1(input)?.to_string(),
        (21, 1) => day21::part1(input)?.to_string(),
        (21, 2) => day21::part2(input)?.to_string(),
        (22, 1) => day22::part1(input)?.to_string(),
        (23, 1) => day23::part1(input)?.to_string(),
        (23, 2) => day23::part2(input)?.to_string(),
        (24, 1) => day24::part1(input)?.to_string(),
        (24, 2) => day24::part2(input)?.to_string(),
        (25, 1) => day25::part1(input)?,
        _ => return missing,
    })
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let answer = solve(args.day, args.part, &input)
        .with_context(|| format!("solving day {} part {}", args.day, args.part))?;
    println!("{answer}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_day_is_rejected() {
        assert!(matches!(
            solve(17, 1, ""),
            Err(Error::NoSuchPart { day: 17, part: 1 })
        ));
    }

    #[test]
    fn missing_part_is_rejected() {
        assert!(matches!(solve(25, 2, ""), Err(Error::NoSuchPart { .. })));
    }
}
