//! Day 22: Monkey Map.

use crate::error::{Error, Result};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    fn step(self) -> (i64, i64) {
        match self {
            Facing::North => (-1, 0),
            Facing::South => (1, 0),
            Facing::East => (0, 1),
            Facing::West => (0, -1),
        }
    }

    fn score(self) -> usize {
        match self {
            Facing::East => 0,
            Facing::South => 1,
            Facing::West => 2,
            Facing::North => 3,
        }
    }

    fn turn_left(self) -> Facing {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    fn turn_right(self) -> Facing {
        self.turn_left().turn_left().turn_left()
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward(usize),
    Left,
    Right,
}

fn parse_grid(drawing: &str) -> Result<Grid<Cell>> {
    // pad ragged lines out to the widest row
    let width = drawing.lines().map(str::len).max().unwrap_or(0);
    let padded: Vec<String> = drawing
        .lines()
        .map(|line| format!("{line:<width$}"))
        .collect();
    Grid::parse(&padded.join("\n"), |ch| match ch {
        ' ' => Ok(Cell::Void),
        '.' => Ok(Cell::Open),
        '#' => Ok(Cell::Wall),
        other => Err(Error::bad_line(other.to_string())),
    })
}

fn parse_path(directions: &str) -> Result<Vec<Step>> {
    let mut path = Vec::new();
    let mut digits = String::new();
    for ch in directions.trim().chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            'L' | 'R' => {
                if !digits.is_empty() {
                    path.push(Step::Forward(digits.parse()?));
                    digits.clear();
                }
                path.push(if ch == 'L' { Step::Left } else { Step::Right });
            }
            other => return Err(Error::bad_line(other.to_string())),
        }
    }
    if !digits.is_empty() {
        path.push(Step::Forward(digits.parse()?));
    }
    Ok(path)
}

/// One step forward, wrapping across the void; a wall leaves us in place.
fn take_one_step(grid: &Grid<Cell>, position: (usize, usize), facing: Facing) -> (usize, usize) {
    let (drow, dcol) = facing.step();
    let nrows = grid.height() as i64;
    let ncols = grid.width() as i64;

    let mut proposed = position;
    loop {
        proposed = (
            (proposed.0 as i64 + drow).rem_euclid(nrows) as usize,
            (proposed.1 as i64 + dcol).rem_euclid(ncols) as usize,
        );
        match grid[proposed] {
            Cell::Void => continue,
            Cell::Wall => return position,
            Cell::Open => return proposed,
        }
    }
}

pub fn part1(input: &str) -> Result<usize> {
    let (drawing, directions) = input
        .split_once("\n\n")
        .ok_or_else(|| Error::bad_line(input))?;
    let grid = parse_grid(drawing)?;
    let path = parse_path(directions)?;

    let start_col = (0..grid.width())
        .find(|&col| grid[(0, col)] == Cell::Open)
        .ok_or(Error::NoSolution)?;
    let mut position = (0, start_col);
    let mut facing = Facing::East;

    for step in path {
        match step {
            Step::Left => facing = facing.turn_left(),
            Step::Right => facing = facing.turn_right(),
            Step::Forward(count) => {
                for _ in 0..count {
                    let new_position = take_one_step(&grid, position, facing);
                    if new_position == position {
                        // hit a wall
                        break;
                    }
                    position = new_position;
                }
            }
        }
    }

    Ok((position.0 + 1) * 1000 + (position.1 + 1) * 4 + facing.score())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5";

    #[test]
    fn path_parsing() {
        let path = parse_path("10R5L5").unwrap();
        assert!(matches!(path[0], Step::Forward(10)));
        assert!(matches!(path[1], Step::Right));
        assert!(matches!(path[4], Step::Forward(5)));
    }

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 6032);
    }
}
