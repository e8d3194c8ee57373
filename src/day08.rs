//! Day 8: Treetop Tree House.

use crate::error::{Error, Result};
use crate::grid::Grid;

fn parse(input: &str) -> Result<Grid<u32>> {
    Grid::parse(input, |ch| {
        ch.to_digit(10)
            .ok_or_else(|| Error::bad_line(ch.to_string()))
    })
}

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walk from `(row, col)` in one direction, returning the heights seen.
fn line_of_sight(
    grid: &Grid<u32>,
    (row, col): (usize, usize),
    (dr, dc): (isize, isize),
) -> impl Iterator<Item = u32> + '_ {
    (1..).map_while(move |step| {
        let row = row.checked_add_signed(dr * step)?;
        let col = col.checked_add_signed(dc * step)?;
        grid.get(row, col).copied()
    })
}

pub fn part1(input: &str) -> Result<usize> {
    let grid = parse(input)?;
    let visible = grid
        .positions()
        .filter(|&pos| {
            let height = grid[pos];
            DIRECTIONS
                .iter()
                .any(|&dir| line_of_sight(&grid, pos, dir).all(|tree| tree < height))
        })
        .count();
    Ok(visible)
}

/// How many trees are visible looking out from `height`, stopping at the
/// first tree at least as tall.
fn look_out(height: u32, view: impl Iterator<Item = u32>) -> usize {
    let mut score = 0;
    for tree in view {
        score += 1;
        if tree >= height {
            break;
        }
    }
    score
}

pub fn part2(input: &str) -> Result<usize> {
    let grid = parse(input)?;
    grid.positions()
        .map(|pos| {
            let height = grid[pos];
            DIRECTIONS
                .iter()
                .map(|&dir| look_out(height, line_of_sight(&grid, pos, dir)))
                .product()
        })
        .max()
        .ok_or(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
30373
25512
65332
33549
35390";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 21);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 8);
    }
}
