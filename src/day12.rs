//! Day 12: Hill Climbing Algorithm.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::grid::Grid;

struct Heightmap {
    elevations: Grid<u8>,
    start: (usize, usize),
    summit: (usize, usize),
}

fn parse(input: &str) -> Result<Heightmap> {
    let mut start = None;
    let mut summit = None;
    for (row, line) in input.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                'S' => start = Some((row, col)),
                'E' => summit = Some((row, col)),
                _ => {}
            }
        }
    }
    let elevations = Grid::parse(input, |ch| match ch {
        'S' => Ok(0),
        'E' => Ok(25),
        'a'..='z' => Ok(ch as u8 - b'a'),
        other => Err(Error::bad_line(other.to_string())),
    })?;
    Ok(Heightmap {
        elevations,
        start: start.ok_or(Error::NoSolution)?,
        summit: summit.ok_or(Error::NoSolution)?,
    })
}

fn neighbors(grid: &Grid<u8>, (row, col): (usize, usize)) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(4);
    for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
        let Some(nrow) = row.checked_add_signed(dr) else {
            continue;
        };
        let Some(ncol) = col.checked_add_signed(dc) else {
            continue;
        };
        if grid.get(nrow, ncol).is_some() {
            out.push((nrow, ncol));
        }
    }
    out
}

/// BFS downhill from the summit; step summit->cell is legal when the climb
/// cell->summit would be (at most one up).
fn distances_from_summit(map: &Heightmap) -> Grid<Option<usize>> {
    let grid = &map.elevations;
    let mut scores: Grid<Option<usize>> = Grid::new(grid.height(), grid.width(), None);
    scores[map.summit] = Some(0);
    let mut work_list = VecDeque::new();
    work_list.push_back(map.summit);

    while let Some(pos) = work_list.pop_front() {
        let Some(depth) = scores[pos] else {
            continue;
        };
        for next in neighbors(grid, pos) {
            // walking backwards: the forward step would go next -> pos
            if grid[pos] > grid[next] + 1 || scores[next].is_some() {
                continue;
            }
            scores[next] = Some(depth + 1);
            work_list.push_back(next);
        }
    }
    scores
}

pub fn part1(input: &str) -> Result<usize> {
    let map = parse(input)?;
    let scores = distances_from_summit(&map);
    scores[map.start].ok_or(Error::NoSolution)
}

pub fn part2(input: &str) -> Result<usize> {
    let map = parse(input)?;
    let scores = distances_from_summit(&map);
    map.elevations
        .positions()
        .filter(|&pos| map.elevations[pos] == 0)
        .filter_map(|pos| scores[pos])
        .min()
        .ok_or(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 31);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 29);
    }
}
