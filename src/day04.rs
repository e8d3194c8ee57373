//! Day 4: Camp Cleanup.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct Assignment {
    lo: u64,
    hi: u64,
}

impl Assignment {
    fn contains(self, other: Assignment) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    fn overlaps(self, other: Assignment) -> bool {
        (other.lo <= self.lo && self.lo <= other.hi) || (self.lo <= other.lo && other.lo <= self.hi)
    }
}

fn parse_range(text: &str) -> Result<Assignment> {
    let (lo, hi) = text.split_once('-').ok_or_else(|| Error::bad_line(text))?;
    Ok(Assignment {
        lo: lo.parse()?,
        hi: hi.parse()?,
    })
}

fn parse(input: &str) -> Result<Vec<(Assignment, Assignment)>> {
    input
        .lines()
        .map(|line| {
            let (a, b) = line.split_once(',').ok_or_else(|| Error::bad_line(line))?;
            Ok((parse_range(a)?, parse_range(b)?))
        })
        .collect()
}

pub fn part1(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .into_iter()
        .filter(|&(a, b)| a.contains(b) || b.contains(a))
        .count())
}

pub fn part2(input: &str) -> Result<usize> {
    Ok(parse(input)?
        .into_iter()
        .filter(|&(a, b)| a.overlaps(b))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 2);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 4);
    }
}
