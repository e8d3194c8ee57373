//! Day 6: Tuning Trouble.

use crate::error::{Error, Result};

/// Count of each ASCII letter currently inside the sliding window.
struct Window {
    counts: [u8; 256],
    distinct: usize,
}

impl Window {
    fn new() -> Self {
        Window {
            counts: [0; 256],
            distinct: 0,
        }
    }

    fn push(&mut self, byte: u8) {
        let count = &mut self.counts[byte as usize];
        *count += 1;
        if *count == 1 {
            self.distinct += 1;
        }
    }

    fn pop(&mut self, byte: u8) {
        let count = &mut self.counts[byte as usize];
        *count -= 1;
        if *count == 0 {
            self.distinct -= 1;
        }
    }
}

/// Number of characters consumed before the first window of `length`
/// distinct characters is complete.
fn marker_position(input: &str, length: usize) -> Result<usize> {
    let bytes = input.trim_end().as_bytes();
    if bytes.len() < length {
        return Err(Error::NoSolution);
    }

    let mut window = Window::new();
    for &byte in &bytes[..length] {
        window.push(byte);
    }
    if window.distinct == length {
        return Ok(length);
    }

    for (index, (&incoming, &outgoing)) in bytes[length..].iter().zip(bytes.iter()).enumerate() {
        window.push(incoming);
        window.pop(outgoing);
        if window.distinct == length {
            return Ok(index + length + 1);
        }
    }
    Err(Error::NoSolution)
}

pub fn part1(input: &str) -> Result<usize> {
    marker_position(input, 4)
}

pub fn part2(input: &str) -> Result<usize> {
    marker_position(input, 14)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7)]
    #[case("bvwbjplbgvbhsrlpgdmjqwftvncz", 5)]
    #[case("nppdvjthqldpwncqszvftbrmjlhg", 6)]
    #[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10)]
    #[case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11)]
    fn packet_markers(#[case] stream: &str, #[case] expected: usize) {
        assert_eq!(part1(stream).unwrap(), expected);
    }

    #[rstest]
    #[case("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 19)]
    #[case("bvwbjplbgvbhsrlpgdmjqwftvncz", 23)]
    #[case("nppdvjthqldpwncqszvftbrmjlhg", 23)]
    #[case("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 29)]
    #[case("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 26)]
    fn message_markers(#[case] stream: &str, #[case] expected: usize) {
        assert_eq!(part2(stream).unwrap(), expected);
    }
}
