//! Day 13: Distress Signal.

use std::cmp::Ordering;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packet {
    Int(u64),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(left), Packet::Int(right)) => left.cmp(right),
            (Packet::List(left), Packet::List(right)) => {
                for (a, b) in left.iter().zip(right.iter()) {
                    let result = a.cmp(b);
                    if result != Ordering::Equal {
                        return result;
                    }
                }
                left.len().cmp(&right.len())
            }
            (Packet::Int(_), Packet::List(_)) => {
                Packet::List(vec![self.clone()]).cmp(other)
            }
            (Packet::List(_), Packet::Int(_)) => {
                self.cmp(&Packet::List(vec![other.clone()]))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Recursive-descent parse of one `[...]` packet expression.
fn parse_value(bytes: &[u8], at: &mut usize) -> Result<Packet> {
    let bad = || Error::bad_line(String::from_utf8_lossy(bytes).into_owned());
    match bytes.get(*at) {
        Some(b'[') => {
            *at += 1;
            let mut items = Vec::new();
            loop {
                match bytes.get(*at) {
                    Some(b']') => {
                        *at += 1;
                        return Ok(Packet::List(items));
                    }
                    Some(b',') => *at += 1,
                    Some(_) => items.push(parse_value(bytes, at)?),
                    None => return Err(bad()),
                }
            }
        }
        Some(digit) if digit.is_ascii_digit() => {
            let start = *at;
            while bytes.get(*at).is_some_and(u8::is_ascii_digit) {
                *at += 1;
            }
            let number = std::str::from_utf8(&bytes[start..*at]).map_err(|_| bad())?;
            Ok(Packet::Int(number.parse()?))
        }
        _ => Err(bad()),
    }
}

fn parse_packet(line: &str) -> Result<Packet> {
    let mut at = 0;
    let packet = parse_value(line.as_bytes(), &mut at)?;
    if at != line.len() {
        return Err(Error::bad_line(line));
    }
    Ok(packet)
}

fn parse(input: &str) -> Result<Vec<Packet>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_packet)
        .collect()
}

/// Sum of 1-based indices of pairs already in the right order.
pub fn part1(input: &str) -> Result<usize> {
    let packets = parse(input)?;
    if packets.len() % 2 != 0 {
        // packets arrive in pairs
        return Err(Error::bad_line(input));
    }
    Ok(packets
        .chunks(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] < pair[1])
        .map(|(index, _)| index + 1)
        .sum())
}

pub fn part2(input: &str) -> Result<usize> {
    let mut packets = parse(input)?;
    let dividers = [parse_packet("[[2]]")?, parse_packet("[[6]]")?];
    packets.extend(dividers.iter().cloned());
    packets.sort();

    let mut key = 1;
    for (index, packet) in packets.iter().enumerate() {
        if dividers.contains(packet) {
            key *= index + 1;
        }
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE: &str = "\
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]";

    #[rstest]
    #[case("[1,1,3,1,1]", "[1,1,5,1,1]", true)]
    #[case("[[1],[2,3,4]]", "[[1],4]", true)]
    #[case("[9]", "[[8,7,6]]", false)]
    #[case("[7,7,7,7]", "[7,7,7]", false)]
    #[case("[]", "[3]", true)]
    #[case("[[[]]]", "[[]]", false)]
    fn pair_ordering(#[case] left: &str, #[case] right: &str, #[case] ordered: bool) {
        let left = parse_packet(left).unwrap();
        let right = parse_packet(right).unwrap();
        assert_eq!(left < right, ordered);
    }

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 13);
    }

    #[test]
    fn unpaired_packet_is_rejected() {
        assert!(part1("[1]").is_err());
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 140);
    }
}
