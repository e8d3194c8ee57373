//! Day 14: Regolith Reservoir.

use std::collections::HashSet;

use crate::error::{Error, Result};

type Point = (i64, i64);

const SOURCE: Point = (500, 0);

struct Cave {
    blocked: HashSet<Point>,
    /// One past the deepest rock; sand resting here is sitting on the floor.
    bottom: i64,
}

impl Cave {
    fn add_segment(&mut self, (x1, y1): Point, (x2, y2): Point) -> Result<()> {
        if x1 != x2 && y1 != y2 {
            // rock paths are drawn in axis-aligned segments only
            return Err(Error::bad_line(format!("{x1},{y1} -> {x2},{y2}")));
        }
        for x in x1.min(x2)..=x1.max(x2) {
            for y in y1.min(y2)..=y1.max(y2) {
                self.blocked.insert((x, y));
                self.bottom = self.bottom.max(y);
            }
        }
        Ok(())
    }

    /// Where one unit of sand comes to rest.
    fn drop_sand(&mut self) -> Point {
        let (mut x, mut y) = SOURCE;
        loop {
            if y == self.bottom {
                break;
            }
            if let Some(next_x) = [x, x - 1, x + 1]
                .into_iter()
                .find(|&nx| !self.blocked.contains(&(nx, y + 1)))
            {
                x = next_x;
                y += 1;
            } else {
                break;
            }
        }
        self.blocked.insert((x, y));
        (x, y)
    }
}

fn parse_point(text: &str) -> Result<Point> {
    let (x, y) = text
        .trim()
        .split_once(',')
        .ok_or_else(|| Error::bad_line(text))?;
    Ok((x.parse()?, y.parse()?))
}

fn parse(input: &str) -> Result<Cave> {
    let mut cave = Cave {
        blocked: HashSet::new(),
        bottom: 0,
    };
    for line in input.lines() {
        let points = line
            .split(" -> ")
            .map(parse_point)
            .collect::<Result<Vec<Point>>>()?;
        for pair in points.windows(2) {
            cave.add_segment(pair[0], pair[1])?;
        }
    }
    cave.bottom += 1;
    Ok(cave)
}

/// Units of sand that fall before the source itself is plugged.
pub fn part2(input: &str) -> Result<u64> {
    let mut cave = parse(input)?;
    let mut count = 0;
    loop {
        count += 1;
        if cave.drop_sand() == SOURCE {
            return Ok(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9";

    #[test]
    fn example() {
        assert_eq!(part2(EXAMPLE).unwrap(), 93);
    }
}
