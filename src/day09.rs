//! Day 9: Rope Bridge.

use std::collections::HashSet;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
struct Position {
    row: i64,
    col: i64,
}

impl Position {
    fn touches(self, other: Position) -> bool {
        (self.col - other.col).abs() <= 1 && (self.row - other.row).abs() <= 1
    }
}

struct Rope {
    knots: Vec<Position>,
    trail: HashSet<Position>,
}

impl Rope {
    fn new(length: usize) -> Self {
        let knots = vec![Position::default(); length];
        let mut trail = HashSet::new();
        trail.insert(Position::default());
        Rope { knots, trail }
    }

    /// Move the head one step and let every follower close the gap.
    fn step(&mut self, drow: i64, dcol: i64) {
        self.knots[0].row += drow;
        self.knots[0].col += dcol;

        for i in 1..self.knots.len() {
            let leader = self.knots[i - 1];
            let follower = &mut self.knots[i];
            if leader.touches(*follower) {
                continue;
            }
            follower.col += (leader.col - follower.col).signum();
            follower.row += (leader.row - follower.row).signum();
        }

        if let Some(&tail) = self.knots.last() {
            self.trail.insert(tail);
        }
    }

    fn visit_count(&self) -> usize {
        self.trail.len()
    }
}

fn simulate(input: &str, length: usize) -> Result<usize> {
    let mut rope = Rope::new(length);
    for line in input.lines() {
        let (direction, distance) = line.split_once(' ').ok_or_else(|| Error::bad_line(line))?;
        let (drow, dcol) = match direction {
            "L" => (0, -1),
            "R" => (0, 1),
            "U" => (1, 0),
            "D" => (-1, 0),
            _ => return Err(Error::bad_line(line)),
        };
        for _ in 0..distance.parse::<u32>()? {
            rope.step(drow, dcol);
        }
    }
    Ok(rope.visit_count())
}

pub fn part1(input: &str) -> Result<usize> {
    simulate(input, 2)
}

pub fn part2(input: &str) -> Result<usize> {
    simulate(input, 10)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE: &str = "\
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2";

    const LARGER_EXAMPLE: &str = "\
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 13);
    }

    #[rstest]
    #[case(EXAMPLE, 1)]
    #[case(LARGER_EXAMPLE, 36)]
    fn example_part2(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(part2(input).unwrap(), expected);
    }
}
