//! Day 16: Proboscidea Volcanium.
//!
//! Valves are indexed, pairwise distances come from BFS over the tunnel
//! graph, and the search only ever considers hopping directly to the next
//! valve worth opening.

use std::collections::HashMap;

use crate::error::{Error, Result};

struct Volcano {
    rates: Vec<u64>,
    /// Minutes to walk between any two valves.
    distances: Vec<Vec<u32>>,
    /// Indices of valves with nonzero flow, the only ones worth opening.
    worth_opening: Vec<usize>,
    start: usize,
}

fn parse(input: &str) -> Result<Volcano> {
    let mut indices: HashMap<&str, usize> = HashMap::new();
    let mut rates = Vec::new();
    let mut tunnels: Vec<Vec<&str>> = Vec::new();

    for line in input.lines() {
        // Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() < 10 {
            return Err(Error::bad_line(line));
        }
        let (name, rate_word) = (words[1], words[4]);
        let rate = rate_word
            .trim_start_matches("rate=")
            .trim_end_matches(';')
            .parse()?;
        let children: Vec<&str> = words[9..]
            .iter()
            .map(|child| child.trim_end_matches(','))
            .collect();
        indices.insert(name, rates.len());
        rates.push(rate);
        tunnels.push(children);
    }

    let count = rates.len();
    let mut distances = vec![vec![u32::MAX; count]; count];
    for origin in 0..count {
        // layered BFS, one hop at a time
        distances[origin][origin] = 0;
        let mut frontier = vec![origin];
        let mut cost = 1;
        while !frontier.is_empty() {
            let mut reached = Vec::new();
            for &valve in &frontier {
                for child in &tunnels[valve] {
                    let child = *indices
                        .get(child)
                        .ok_or_else(|| Error::bad_line(*child))?;
                    if distances[origin][child] == u32::MAX {
                        distances[origin][child] = cost;
                        reached.push(child);
                    }
                }
            }
            cost += 1;
            frontier = reached;
        }
    }

    let worth_opening = (0..count).filter(|&valve| rates[valve] > 0).collect();
    let start = *indices.get("AA").ok_or_else(|| Error::bad_line("AA"))?;
    Ok(Volcano {
        rates,
        distances,
        worth_opening,
        start,
    })
}

impl Volcano {
    /// Best additional pressure from `position` with `time_remaining` minutes,
    /// visiting only valves still set in `remaining` (bits index
    /// `worth_opening`). `best` records the optimum per visited set.
    fn search(
        &self,
        position: usize,
        remaining: u32,
        visited: u32,
        time_remaining: u32,
        released: u64,
        best: &mut HashMap<u32, u64>,
    ) {
        let entry = best.entry(visited).or_insert(0);
        *entry = (*entry).max(released);

        for (bit, &valve) in self.worth_opening.iter().enumerate() {
            if remaining & (1 << bit) == 0 {
                continue;
            }
            let cost = self.distances[position][valve] + 1;
            if cost >= time_remaining {
                continue;
            }
            let time_left = time_remaining - cost;
            self.search(
                valve,
                remaining & !(1 << bit),
                visited | (1 << bit),
                time_left,
                released + self.rates[valve] * u64::from(time_left),
                best,
            );
        }
    }

    fn best_scores(&self, deadline: u32) -> HashMap<u32, u64> {
        let all = (1u32 << self.worth_opening.len()) - 1;
        let mut best = HashMap::new();
        self.search(self.start, all, 0, deadline, 0, &mut best);
        best
    }
}

pub fn part1(input: &str) -> Result<u64> {
    let volcano = parse(input)?;
    volcano
        .best_scores(30)
        .into_values()
        .max()
        .ok_or(Error::NoSolution)
}

/// You and the elephant open disjoint valve sets in 26 minutes.
pub fn part2(input: &str) -> Result<u64> {
    let volcano = parse(input)?;
    let best = volcano.best_scores(26);
    let mut top = 0;
    for (&mine, &my_score) in &best {
        for (&theirs, &their_score) in &best {
            if mine & theirs == 0 {
                top = top.max(my_score + their_score);
            }
        }
    }
    Ok(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 1651);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 1707);
    }
}
