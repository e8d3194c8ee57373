//! Day 23: Unstable Diffusion.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

type Position = (i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    North,
    South,
    West,
    East,
}

impl Side {
    fn step(self, (row, col): Position) -> Position {
        match self {
            Side::North => (row - 1, col),
            Side::South => (row + 1, col),
            Side::West => (row, col - 1),
            Side::East => (row, col + 1),
        }
    }

    /// The three cells an elf checks before proposing a move this way.
    fn scan(self, (row, col): Position) -> [Position; 3] {
        match self {
            Side::North => [(row - 1, col - 1), (row - 1, col), (row - 1, col + 1)],
            Side::South => [(row + 1, col - 1), (row + 1, col), (row + 1, col + 1)],
            Side::West => [(row - 1, col - 1), (row, col - 1), (row + 1, col - 1)],
            Side::East => [(row - 1, col + 1), (row, col + 1), (row + 1, col + 1)],
        }
    }
}

fn all_neighbors((row, col): Position) -> [Position; 8] {
    [
        (row - 1, col - 1),
        (row - 1, col),
        (row - 1, col + 1),
        (row, col - 1),
        (row, col + 1),
        (row + 1, col - 1),
        (row + 1, col),
        (row + 1, col + 1),
    ]
}

fn parse(input: &str) -> Result<HashSet<Position>> {
    let mut elves = HashSet::new();
    for (row, line) in input.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '#' => {
                    elves.insert((row as i64, col as i64));
                }
                '.' => {}
                other => return Err(Error::bad_line(other.to_string())),
            }
        }
    }
    Ok(elves)
}

/// Run one round. Returns the new positions and whether anyone moved.
fn round(elves: &HashSet<Position>, consider_order: &[Side; 4]) -> (HashSet<Position>, bool) {
    // key = destination, value = elves proposing to move there
    let mut proposed_moves: HashMap<Position, Vec<Position>> = HashMap::new();
    let mut stable = true;

    for &elf in elves {
        let crowded = all_neighbors(elf)
            .iter()
            .any(|neighbor| elves.contains(neighbor));
        let proposal = if crowded {
            consider_order
                .iter()
                .find(|side| {
                    side.scan(elf)
                        .iter()
                        .all(|checked| !elves.contains(checked))
                })
                .map(|side| side.step(elf))
        } else {
            None
        };
        match proposal {
            Some(dest) => {
                stable = false;
                proposed_moves.entry(dest).or_default().push(elf);
            }
            None => proposed_moves.entry(elf).or_default().push(elf),
        }
    }

    let mut next = HashSet::with_capacity(elves.len());
    for (dest, proposers) in proposed_moves {
        if proposers.len() == 1 {
            next.insert(dest);
        } else {
            // contested destination, everyone stays put
            next.extend(proposers);
        }
    }
    (next, stable)
}

fn rotate(order: &mut [Side; 4]) {
    order.rotate_left(1);
}

/// Empty ground inside the elves' bounding rectangle after ten rounds.
pub fn part1(input: &str) -> Result<usize> {
    let mut elves = parse(input)?;
    let mut order = [Side::North, Side::South, Side::West, Side::East];
    for _ in 0..10 {
        let (next, _) = round(&elves, &order);
        elves = next;
        rotate(&mut order);
    }

    let (mut min_row, mut max_row) = (i64::MAX, i64::MIN);
    let (mut min_col, mut max_col) = (i64::MAX, i64::MIN);
    for &(row, col) in &elves {
        min_row = min_row.min(row);
        max_row = max_row.max(row);
        min_col = min_col.min(col);
        max_col = max_col.max(col);
    }
    if elves.is_empty() {
        return Err(Error::NoSolution);
    }
    let area = (max_row - min_row + 1) * (max_col - min_col + 1);
    Ok(area as usize - elves.len())
}

/// Number of the first round in which no elf moves.
pub fn part2(input: &str) -> Result<u64> {
    let mut elves = parse(input)?;
    let mut order = [Side::North, Side::South, Side::West, Side::East];
    let mut rounds = 0;
    loop {
        rounds += 1;
        let (next, stable) = round(&elves, &order);
        elves = next;
        rotate(&mut order);
        if stable {
            return Ok(rounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 110);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 20);
    }
}
