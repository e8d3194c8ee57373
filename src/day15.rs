//! Day 15: Beacon Exclusion Zone.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Range {
    x_min: i64,
    x_max: i64,
}

#[derive(Debug, Clone, Copy)]
struct SensorReading {
    sensor: (i64, i64),
    closest_beacon: (i64, i64),
}

impl SensorReading {
    fn manhattan_distance(&self) -> i64 {
        (self.sensor.0 - self.closest_beacon.0).abs()
            + (self.sensor.1 - self.closest_beacon.1).abs()
    }

    /// The x interval this sensor rules out on `row`, if it reaches the row.
    fn eval_row(&self, row: i64) -> Option<Range> {
        let width = self.manhattan_distance() - (self.sensor.1 - row).abs();
        (width >= 0).then_some(Range {
            x_min: self.sensor.0 - width,
            x_max: self.sensor.0 + width,
        })
    }
}

/// "x=-2, y=15:" style coordinate fields.
fn coordinate(word: &str) -> Result<i64> {
    let digits: &str = word
        .trim_start_matches(|ch: char| !ch.is_ascii_digit() && ch != '-')
        .trim_end_matches([',', ':']);
    Ok(digits.parse()?)
}

fn parse(input: &str) -> Result<Vec<SensorReading>> {
    input
        .lines()
        .map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() != 10 {
                return Err(Error::bad_line(line));
            }
            Ok(SensorReading {
                sensor: (coordinate(words[2])?, coordinate(words[3])?),
                closest_beacon: (coordinate(words[8])?, coordinate(words[9])?),
            })
        })
        .collect()
}

/// Merge clamped, sorted ranges; more than one surviving range means a gap.
fn merged_coverage(ranges: &mut Vec<Range>, clip_low: i64, clip_high: i64) -> Vec<Range> {
    ranges.sort();
    let mut filled: Vec<Range> = Vec::new();
    for range in ranges.iter() {
        let range = Range {
            x_min: range.x_min.max(clip_low),
            x_max: range.x_max.min(clip_high),
        };
        match filled
            .iter_mut()
            .find(|fill| range.x_min <= fill.x_max + 1 && fill.x_min <= range.x_max + 1)
        {
            Some(fill) => {
                fill.x_min = fill.x_min.min(range.x_min);
                fill.x_max = fill.x_max.max(range.x_max);
            }
            None => filled.push(range),
        }
    }
    filled
}

/// Tuning frequency of the single uncovered position within `0..=bound`.
pub fn part2(input: &str, bound: i64) -> Result<i64> {
    let sensor_data = parse(input)?;

    for key_row in 0..=bound {
        let mut ranges: Vec<Range> = sensor_data
            .iter()
            .filter_map(|reading| reading.eval_row(key_row))
            .collect();
        let filled = merged_coverage(&mut ranges, 0, bound);
        if filled.len() > 1 {
            tracing::debug!(row = key_row, ?filled, "found coverage gap");
            return Ok(4_000_000 * (filled[0].x_max + 1) + key_row);
        }
    }
    Err(Error::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3";

    #[test]
    fn example() {
        assert_eq!(part2(EXAMPLE, 20).unwrap(), 56000011);
    }
}
