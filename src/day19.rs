//! Day 19: Not Enough Minerals.
//!
//! Branch and bound over robot-purchase events. A search step jumps straight
//! to the minute a chosen purchase completes (or runs out the clock), visited
//! states are hashed, and branches whose theoretical geode optimum cannot
//! beat the current best are pruned.

use std::collections::HashSet;

use crate::error::{Error, Result};

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;
const ROCKS: [usize; 4] = [ORE, CLAY, OBSIDIAN, GEODE];

/// A quantity of each rock kind: a robot's cost, or the purse contents.
type Assets = [u32; 4];

fn sufficient_funds(purse: &Assets, cost: &Assets) -> bool {
    ROCKS.iter().all(|&rock| cost[rock] <= purse[rock])
}

#[derive(Debug, Clone)]
pub struct Blueprint {
    id: u32,
    costs: [Assets; 4],
    deadline: u32,
}

fn numbers(text: &str) -> Result<Vec<u32>> {
    text.split(|ch: char| !ch.is_ascii_digit())
        .filter(|word| !word.is_empty())
        .map(|word| Ok(word.parse()?))
        .collect()
}

impl Blueprint {
    fn parse(line: &str, deadline: u32) -> Result<Self> {
        // Blueprint N: Each ore robot costs A ore. Each clay robot costs B
        // ore. Each obsidian robot costs C ore and D clay. Each geode robot
        // costs E ore and F obsidian.
        let values = numbers(line)?;
        let [id, ore, clay, obsidian_ore, obsidian_clay, geode_ore, geode_obsidian] =
            values.as_slice()
        else {
            return Err(Error::bad_line(line));
        };
        let mut costs = [[0; 4]; 4];
        costs[ORE][ORE] = *ore;
        costs[CLAY][ORE] = *clay;
        costs[OBSIDIAN][ORE] = *obsidian_ore;
        costs[OBSIDIAN][CLAY] = *obsidian_clay;
        costs[GEODE][ORE] = *geode_ore;
        costs[GEODE][OBSIDIAN] = *geode_obsidian;
        Ok(Blueprint {
            id: *id,
            costs,
            deadline,
        })
    }

    /// Last minute at which buying this robot kind can still raise the final
    /// geode count: a geode bot bought at deadline-2 delivers one geode; each
    /// kind upstream needs two more minutes to matter.
    fn purchase_deadline(&self, rock: usize) -> u32 {
        match rock {
            GEODE => self.deadline - 2,
            OBSIDIAN => self.deadline - 4,
            _ => self.deadline - 6,
        }
    }

    fn ready_deadline(&self, rock: usize) -> u32 {
        self.purchase_deadline(rock) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Build(usize),
    RunOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    robots: Assets,
    purse: Assets,
    ticks: u32,
}

impl SearchState {
    fn start() -> Self {
        SearchState {
            robots: [1, 0, 0, 0],
            purse: [0; 4],
            ticks: 0,
        }
    }

    fn produce(&self, purse: &mut Assets, n_ticks: u32) {
        for rock in ROCKS {
            purse[rock] += self.robots[rock] * n_ticks;
        }
    }

    /// Minutes until the purse can afford a robot of this kind, production
    /// included. The event model guarantees the incoming rocks are being
    /// produced; the deadline cap only guards against a stuck loop.
    fn time_to_newbot(&self, bp: &Blueprint, rock: usize) -> u32 {
        let cost = &bp.costs[rock];
        let mut purse = self.purse;
        let mut time = 0;
        while !sufficient_funds(&purse, cost) {
            self.produce(&mut purse, 1);
            time += 1;
            if time > bp.deadline {
                break;
            }
        }
        time
    }

    /// Rocks already in the purse count as fractional robots: with 10 clay
    /// banked and 5 useful minutes left, two clay bots' worth of supply is
    /// already in hand.
    fn purse_robot_adjustment(&self, bp: &Blueprint, rock: usize) -> u32 {
        debug_assert_ne!(rock, GEODE);
        if self.purse[rock] == 0 {
            return 0;
        }
        let ready = bp.ready_deadline(rock);
        if self.ticks >= ready {
            // past the point where banked rocks can be spent usefully
            return u32::MAX;
        }
        self.purse[rock] / (ready - self.ticks)
    }

    fn need_more_bots(&self, bp: &Blueprint, rock: usize) -> bool {
        if self.ticks + self.time_to_newbot(bp, rock) > bp.purchase_deadline(rock) {
            return false;
        }

        let hard_limit = match rock {
            ORE => ROCKS
                .iter()
                .map(|&kind| bp.costs[kind][ORE])
                .max()
                .unwrap_or(0),
            CLAY => bp.costs[OBSIDIAN][CLAY],
            OBSIDIAN => bp.costs[GEODE][OBSIDIAN],
            // no hard limit on geode bots, just the purchase deadline
            _ => return true,
        };
        self.robots[rock].saturating_add(self.purse_robot_adjustment(bp, rock)) < hard_limit
    }

    fn run_one_event(&mut self, bp: &Blueprint, event: Event) {
        match event {
            Event::Build(rock) => {
                let wait = self.time_to_newbot(bp, rock);
                let mut purse = self.purse;
                self.produce(&mut purse, wait);
                self.ticks += wait;

                // the new robot doesn't produce on the minute it is built
                self.produce(&mut purse, 1);
                for kind in ROCKS {
                    purse[kind] -= bp.costs[rock][kind];
                }
                self.robots[rock] += 1;
                self.ticks += 1;
                self.purse = purse;
            }
            Event::RunOut => {
                let wait = bp.deadline - self.ticks;
                let mut purse = self.purse;
                self.produce(&mut purse, wait);
                self.purse = purse;
                self.ticks = bp.deadline;
            }
        }
    }

    fn feasible_events(&self, bp: &Blueprint) -> Vec<Event> {
        let mut events = Vec::new();
        // geode and obsidian bots need their input rock in production
        if self.robots[OBSIDIAN] > 0 && self.need_more_bots(bp, GEODE) {
            events.push(Event::Build(GEODE));
        }
        if self.robots[CLAY] > 0 && self.need_more_bots(bp, OBSIDIAN) {
            events.push(Event::Build(OBSIDIAN));
        }
        if self.need_more_bots(bp, CLAY) {
            events.push(Event::Build(CLAY));
        }
        if self.need_more_bots(bp, ORE) {
            events.push(Event::Build(ORE));
        }
        if events.is_empty() && self.robots[GEODE] > 0 {
            events.push(Event::RunOut);
        }
        events
    }

    /// Admissible bound: current geodes, plus production to the deadline,
    /// plus one extra geode bot built every remaining minute.
    fn theoretical_max_geodes(&self, bp: &Blueprint) -> u32 {
        let ticks_left = bp.deadline - self.ticks;
        self.purse[GEODE] + self.robots[GEODE] * ticks_left + ticks_left * (ticks_left - 1) / 2
    }
}

/// Most geodes this blueprint can open before its deadline.
fn solve_blueprint(bp: &Blueprint) -> u32 {
    let mut best_score = 0;
    let mut worklist = Vec::new();
    let mut already_tried = HashSet::new();

    let start = SearchState::start();
    for event in start.feasible_events(bp) {
        let mut job = start.clone();
        job.run_one_event(bp, event);
        already_tried.insert(job.clone());
        worklist.push(job);
    }

    let mut job_count = worklist.len();
    while let Some(job) = worklist.pop() {
        if job.theoretical_max_geodes(bp) < best_score {
            continue;
        }
        for event in job.feasible_events(bp) {
            let mut newjob = job.clone();
            newjob.run_one_event(bp, event);

            if newjob.ticks == bp.deadline {
                best_score = best_score.max(newjob.purse[GEODE]);
            } else if already_tried.insert(newjob.clone()) {
                worklist.push(newjob);
                job_count += 1;
            }
        }
    }
    tracing::debug!(blueprint = bp.id, job_count, best_score, "search finished");
    best_score
}

/// Sum of blueprint quality levels (id times geodes) at 24 minutes.
pub fn part1(input: &str) -> Result<u32> {
    let mut total_score = 0;
    for line in input.lines() {
        let bp = Blueprint::parse(line, 24)?;
        total_score += bp.id * solve_blueprint(&bp);
    }
    Ok(total_score)
}

/// Product of the geode counts of the first three blueprints at 32 minutes.
pub fn part2(input: &str) -> Result<u32> {
    let mut total_score = 1;
    for line in input.lines().take(3) {
        let bp = Blueprint::parse(line, 32)?;
        total_score *= solve_blueprint(&bp);
    }
    Ok(total_score)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE: &str = "\
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.";

    #[test]
    fn clay_bot_purchases_advance_the_clock() {
        let bp = Blueprint::parse(EXAMPLE.lines().next().unwrap(), 24).unwrap();
        let mut state = SearchState::start();

        // first clay bot comes online at minute 3
        state.run_one_event(&bp, Event::Build(CLAY));
        assert_eq!(state.ticks, 3);
        assert_eq!(state.purse[ORE], 1);
        assert_eq!(state.purse[CLAY], 0);
        assert_eq!(state.robots[ORE], 1);
        assert_eq!(state.robots[CLAY], 1);

        // second at minute 5
        state.run_one_event(&bp, Event::Build(CLAY));
        assert_eq!(state.ticks, 5);
        assert_eq!(state.purse[ORE], 1);
        assert_eq!(state.purse[CLAY], 2);
        assert_eq!(state.robots[CLAY], 2);

        // third at minute 7
        state.run_one_event(&bp, Event::Build(CLAY));
        assert_eq!(state.ticks, 7);
        assert_eq!(state.purse[ORE], 1);
        assert_eq!(state.purse[CLAY], 6);
        assert_eq!(state.robots[CLAY], 3);
    }

    #[rstest]
    #[case(0, 9)]
    #[case(1, 12)]
    fn single_blueprints_at_24(#[case] line: usize, #[case] geodes: u32) {
        let bp = Blueprint::parse(EXAMPLE.lines().nth(line).unwrap(), 24).unwrap();
        assert_eq!(solve_blueprint(&bp), geodes);
    }

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 33);
    }

    #[rstest]
    #[case(0, 56)]
    #[case(1, 62)]
    fn single_blueprints_at_32(#[case] line: usize, #[case] geodes: u32) {
        let bp = Blueprint::parse(EXAMPLE.lines().nth(line).unwrap(), 32).unwrap();
        assert_eq!(solve_blueprint(&bp), geodes);
    }
}
