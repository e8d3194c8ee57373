//! Day 24: Blizzard Basin.
//!
//! The blizzard pattern repeats with period lcm(rows-2, cols-2), so the
//! search runs over a time-expanded graph of (row, col, minute mod period)
//! states, with the walkable squares of every minute precomputed.

use std::collections::{HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Coords {
    row: usize,
    col: usize,
    time: usize,
}

struct Basin {
    /// `open[t]` holds the squares free of walls and blizzards at minute t.
    open: Vec<Grid<bool>>,
    period: usize,
    rows: usize,
    cols: usize,
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn lcm(a: usize, b: usize) -> usize {
    a / gcd(a, b) * b
}

fn parse(input: &str) -> Result<Basin> {
    let raw = Grid::parse(input, |ch| match ch {
        '#' => Ok('#'),
        '.' => Ok('.'),
        '<' | '>' | '^' | 'v' => Ok(ch),
        other => Err(Error::bad_line(other.to_string())),
    })?;
    let rows = raw.height();
    let cols = raw.width();
    let inner_rows = rows - 2;
    let inner_cols = cols - 2;
    let period = lcm(inner_rows, inner_cols);

    // blizzard start positions within the interior, by direction
    let mut blizzards: Vec<((usize, usize), (usize, usize))> = Vec::new();
    for (row, col) in raw.positions() {
        let delta = match raw[(row, col)] {
            '<' => (0, inner_cols - 1),
            '>' => (0, 1),
            '^' => (inner_rows - 1, 0),
            'v' => (1, 0),
            _ => continue,
        };
        blizzards.push(((row - 1, col - 1), delta));
    }

    let mut open = Vec::with_capacity(period);
    for time in 0..period {
        let mut grid = Grid::new(rows, cols, false);
        for (row, col) in raw.positions() {
            grid[(row, col)] = raw[(row, col)] != '#';
        }
        for &((row, col), (drow, dcol)) in &blizzards {
            let brow = (row + drow * time) % inner_rows;
            let bcol = (col + dcol * time) % inner_cols;
            grid[(brow + 1, bcol + 1)] = false;
        }
        open.push(grid);
    }

    Ok(Basin {
        open,
        period,
        rows,
        cols,
    })
}

const MOVES: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

impl Basin {
    fn start(&self) -> (usize, usize) {
        (0, 1)
    }

    fn goal(&self) -> (usize, usize) {
        (self.rows - 1, self.cols - 2)
    }

    fn is_open(&self, row: usize, col: usize, time: usize) -> bool {
        *self.open[time % self.period]
            .get(row, col)
            .unwrap_or(&false)
    }

    /// Fewest minutes from `from` at minute `start_time` to the `goal` cell.
    fn search(&self, from: (usize, usize), start_time: usize, goal: (usize, usize)) -> Result<usize> {
        let start = Coords {
            row: from.0,
            col: from.1,
            time: start_time % self.period,
        };
        let mut visited: HashSet<Coords> = HashSet::new();
        visited.insert(start);
        let mut work_list = VecDeque::new();
        work_list.push_back((start, 0));

        while let Some((at, steps)) = work_list.pop_front() {
            for (drow, dcol) in MOVES {
                let Some(row) = at.row.checked_add_signed(drow) else {
                    continue;
                };
                let Some(col) = at.col.checked_add_signed(dcol) else {
                    continue;
                };
                let time = (at.time + 1) % self.period;
                if !self.is_open(row, col, time) {
                    continue;
                }
                let next = Coords { row, col, time };
                if !visited.insert(next) {
                    continue;
                }
                if (row, col) == goal {
                    return Ok(steps + 1);
                }
                work_list.push_back((next, steps + 1));
            }
        }
        Err(Error::NoSolution)
    }
}

pub fn part1(input: &str) -> Result<usize> {
    let basin = parse(input)?;
    basin.search(basin.start(), 0, basin.goal())
}

/// There, back for the snacks, and there again.
pub fn part2(input: &str) -> Result<usize> {
    let basin = parse(input)?;
    let trip_one = basin.search(basin.start(), 0, basin.goal())?;
    let trip_two = basin.search(basin.goal(), trip_one, basin.start())?;
    let trip_three = basin.search(basin.start(), trip_one + trip_two, basin.goal())?;
    tracing::debug!(trip_one, trip_two, trip_three, "trips complete");
    Ok(trip_one + trip_two + trip_three)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#";

    #[test]
    fn blizzards_repeat() {
        let basin = parse(EXAMPLE).unwrap();
        assert_eq!(basin.period, 12);
        // entrance and exit stay clear at every minute
        for time in 0..basin.period {
            assert!(basin.is_open(0, 1, time));
            assert!(basin.is_open(basin.rows - 1, basin.cols - 2, time));
        }
    }

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 18);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 54);
    }
}
