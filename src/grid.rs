use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};

/// A representation of a 2d grid, sized at runtime from the puzzle input.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner;
/// the first coordinate is the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone,
{
    pub fn new(height: usize, width: usize, fill: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from the lines of a puzzle map, one cell per character.
    ///
    /// Every line must have the same length; `decode` rejects characters the
    /// puzzle does not define.
    pub fn parse(input: &str, mut decode: impl FnMut(char) -> Result<T>) -> Result<Self> {
        let mut width = 0;
        let mut height = 0;
        let mut cells = Vec::new();
        for line in input.lines() {
            if height == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                return Err(Error::bad_line(line));
            }
            for ch in line.chars() {
                cells.push(decode(ch)?);
            }
            height += 1;
        }
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.idx(row, col).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.idx(row, col).map(|idx| &mut self.cells[idx])
    }

    /// Iterate over all `(row, col)` coordinate pairs.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        self.get(row, col).unwrap()
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        self.get_mut(row, col).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rectangular() {
        let grid = Grid::parse("12\n34", |ch| {
            ch.to_digit(10)
                .ok_or_else(|| Error::bad_line(ch.to_string()))
        })
        .unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid[(1, 0)], 3);
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn parse_ragged_is_rejected() {
        let result = Grid::parse("12\n345", |ch| {
            ch.to_digit(10)
                .ok_or_else(|| Error::bad_line(ch.to_string()))
        });
        assert!(result.is_err());
    }
}
