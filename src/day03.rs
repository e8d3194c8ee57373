//! Day 3: Rucksack Reorganization.

use std::collections::HashSet;

use crate::error::{Error, Result};

/// a-z score 1-26, A-Z score 27-52.
fn priority(item: u8) -> Result<u64> {
    match item {
        b'a'..=b'z' => Ok(u64::from(item - b'a') + 1),
        b'A'..=b'Z' => Ok(u64::from(item - b'A') + 27),
        other => Err(Error::bad_line((other as char).to_string())),
    }
}

pub fn part1(input: &str) -> Result<u64> {
    let mut total = 0;
    for line in input.lines() {
        let (front, back) = line.split_at(line.len() / 2);
        let front: HashSet<u8> = front.bytes().collect();
        let shared = back
            .bytes()
            .find(|item| front.contains(item))
            .ok_or_else(|| Error::bad_line(line))?;
        total += priority(shared)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

    #[test]
    fn priorities() {
        assert_eq!(priority(b'p').unwrap(), 16);
        assert_eq!(priority(b'L').unwrap(), 38);
        assert_eq!(priority(b'P').unwrap(), 42);
        assert_eq!(priority(b'v').unwrap(), 22);
    }

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 157);
    }
}
