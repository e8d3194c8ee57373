//! Day 1: Calorie Counting.

use crate::error::{Error, Result};

/// Sum each elf's calorie block; blocks are separated by blank lines.
fn elf_totals(input: &str) -> Result<Vec<u64>> {
    let mut totals = Vec::new();
    let mut current = 0;
    for line in input.lines() {
        if line.is_empty() {
            totals.push(current);
            current = 0;
        } else {
            current += line.parse::<u64>()?;
        }
    }
    if current != 0 {
        totals.push(current);
    }
    Ok(totals)
}

pub fn part1(input: &str) -> Result<u64> {
    elf_totals(input)?
        .into_iter()
        .max()
        .ok_or(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 24000);
    }
}
