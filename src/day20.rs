//! Day 20: Grove Positioning System.

use crate::error::{Error, Result};

fn parse(input: &str) -> Result<Vec<i64>> {
    input.lines().map(|line| Ok(line.parse()?)).collect()
}

/// Mix once: move each number, in original order, by its own value around
/// the circle. Removing the number first leaves `len - 1` slots to wrap in.
fn mix(numbers: &[i64]) -> Vec<i64> {
    if numbers.len() < 2 {
        // nowhere to move
        return numbers.to_vec();
    }
    let mut ring: Vec<(usize, i64)> = numbers.iter().copied().enumerate().collect();
    for original in 0..numbers.len() {
        let Some(at) = ring.iter().position(|&(index, _)| index == original) else {
            continue;
        };
        let item = ring.remove(at);
        let destination = (at as i64 + item.1).rem_euclid(ring.len() as i64) as usize;
        ring.insert(destination, item);
    }
    ring.into_iter().map(|(_, value)| value).collect()
}

/// Sum of the values 1000, 2000 and 3000 places after the zero.
fn grove_coordinates(mixed: &[i64]) -> Result<i64> {
    let zero = mixed
        .iter()
        .position(|&value| value == 0)
        .ok_or(Error::NoSolution)?;
    Ok([1000, 2000, 3000]
        .iter()
        .map(|offset| mixed[(zero + offset) % mixed.len()])
        .sum())
}

pub fn part1(input: &str) -> Result<i64> {
    let numbers = parse(input)?;
    grove_coordinates(&mix(&numbers))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4";

    #[test]
    fn mix_order() {
        // the worked example ends up as 1, 2, -3, 4, 0, 3, -2 (cyclically)
        let mixed = mix(&[1, 2, -3, 3, -2, 0, 4]);
        let zero = mixed.iter().position(|&value| value == 0).unwrap();
        let cycle: Vec<i64> = (0..7).map(|i| mixed[(zero + i) % 7]).collect();
        assert_eq!(cycle, vec![0, 3, -2, 1, 2, -3, 4]);
    }

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), 3);
    }

    #[test]
    fn lone_zero_stays_put() {
        assert_eq!(part1("0").unwrap(), 0);
    }
}
