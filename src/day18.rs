//! Day 18: Boiling Boulders.
//!
//! Part 2 walks the droplet surface itself: every exposed face is a node,
//! faces sharing an edge are adjacent, and the exterior is the largest
//! connected component.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

type Point = (i64, i64, i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

use Direction::*;

const DIRECTIONS: [Direction; 6] = [North, South, East, West, Up, Down];

impl Direction {
    fn opposite(self) -> Direction {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
            Up => Down,
            Down => Up,
        }
    }

    fn perpendicular(self) -> [Direction; 4] {
        match self {
            North | South => [Up, Down, East, West],
            East | West => [Up, Down, North, South],
            Up | Down => [North, South, East, West],
        }
    }

    fn step(self, (x, y, z): Point) -> Point {
        match self {
            East => (x + 1, y, z),
            West => (x - 1, y, z),
            North => (x, y + 1, z),
            South => (x, y - 1, z),
            Up => (x, y, z + 1),
            Down => (x, y, z - 1),
        }
    }
}

/// One face of a cube; the west face of `(x,y,z)` is co-located with the
/// east face of `(x-1,y,z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Face {
    cube: Point,
    side: Direction,
}

impl Face {
    fn alias(self) -> Face {
        Face {
            cube: self.side.step(self.cube),
            side: self.side.opposite(),
        }
    }
}

fn parse(input: &str) -> Result<HashSet<Point>> {
    input
        .lines()
        .map(|line| {
            let mut coords = line.split(',');
            let (Some(x), Some(y), Some(z), None) =
                (coords.next(), coords.next(), coords.next(), coords.next())
            else {
                return Err(Error::bad_line(line));
            };
            Ok((x.parse()?, y.parse()?, z.parse()?))
        })
        .collect()
}

fn exposed_faces(points: &HashSet<Point>) -> HashSet<Face> {
    let mut catalog = HashSet::new();
    for &cube in points {
        for side in DIRECTIONS {
            if !points.contains(&side.step(cube)) {
                catalog.insert(Face { cube, side });
            }
        }
    }
    catalog
}

pub fn part1(input: &str) -> Result<usize> {
    let points = parse(input)?;
    Ok(exposed_faces(&points).len())
}

/// The next exposed face around one edge of `face`, looking toward `pdir`.
///
/// Three candidates, nearest wrap first: the face around the outside corner,
/// the neighbor cube's matching face, and this cube's own perpendicular face.
fn edge_neighbor(catalog: &HashSet<Face>, face: Face, pdir: Direction) -> Option<Face> {
    let candidates = [
        Face {
            cube: face.side.step(face.cube),
            side: pdir,
        },
        Face {
            cube: pdir.step(face.cube),
            side: face.side,
        },
        Face {
            cube: face.cube,
            side: pdir,
        },
    ];
    for candidate in candidates {
        if catalog.contains(&candidate) {
            return Some(candidate);
        }
        let alias = candidate.alias();
        if catalog.contains(&alias) {
            return Some(alias);
        }
    }
    None
}

/// Surface area of the exterior: color connected face components, take the
/// biggest.
pub fn part2(input: &str) -> Result<usize> {
    let points = parse(input)?;
    let catalog = exposed_faces(&points);

    let mut colors: HashMap<Face, u32> = HashMap::new();
    let mut color = 0;
    for &start in &catalog {
        if colors.contains_key(&start) {
            continue;
        }
        color += 1;
        colors.insert(start, color);
        let mut worklist = vec![start];
        while let Some(face) = worklist.pop() {
            for pdir in face.side.perpendicular() {
                let neighbor = edge_neighbor(&catalog, face, pdir).ok_or(Error::NoSolution)?;
                if !colors.contains_key(&neighbor) {
                    colors.insert(neighbor, color);
                    worklist.push(neighbor);
                }
            }
        }
    }

    let mut sizes: HashMap<u32, usize> = HashMap::new();
    for &color in colors.values() {
        *sizes.entry(color).or_insert(0) += 1;
    }
    sizes.into_values().max().ok_or(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE_1: &str = "1,1,1\n2,1,1";
    const EXAMPLE_2: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5";

    #[rstest]
    #[case(EXAMPLE_1, 10)]
    #[case(EXAMPLE_2, 64)]
    fn example_part1(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(part1(input).unwrap(), expected);
    }

    #[rstest]
    #[case(EXAMPLE_1, 10)]
    #[case(EXAMPLE_2, 58)]
    fn example_part2(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(part2(input).unwrap(), expected);
    }
}
