//! Day 21: Monkey Math.
//!
//! Part 1 evaluates the expression tree rooted at `root`. Part 2 evaluates
//! the half of the tree that doesn't contain `humn`, then inverts each
//! operation down the other half to solve for it.

use std::collections::HashMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

#[derive(Debug, Clone)]
enum Job<'a> {
    Constant(i64),
    Operation(&'a str, BinOp, &'a str),
}

type Troop<'a> = HashMap<&'a str, Job<'a>>;

fn parse(input: &str) -> Result<Troop<'_>> {
    let mut troop = HashMap::new();
    for line in input.lines() {
        let (name, code) = line.split_once(':').ok_or_else(|| Error::bad_line(line))?;
        let code = code.trim();
        let job = match code.split_whitespace().collect::<Vec<_>>().as_slice() {
            [value] => Job::Constant(value.parse()?),
            [left, op, right] => {
                let op = match *op {
                    "+" => BinOp::Add,
                    "-" => BinOp::Sub,
                    "*" => BinOp::Mul,
                    "/" => BinOp::Div,
                    _ => return Err(Error::bad_line(line)),
                };
                Job::Operation(left, op, right)
            }
            _ => return Err(Error::bad_line(line)),
        };
        troop.insert(name.trim(), job);
    }
    Ok(troop)
}

fn eval(troop: &Troop, name: &str) -> Result<i64> {
    match troop.get(name).ok_or_else(|| Error::bad_line(name))? {
        Job::Constant(value) => Ok(*value),
        Job::Operation(left, op, right) => Ok(op.apply(eval(troop, left)?, eval(troop, right)?)),
    }
}

pub fn part1(input: &str) -> Result<i64> {
    let troop = parse(input)?;
    eval(&troop, "root")
}

fn depends_on_humn(troop: &Troop, name: &str) -> bool {
    if name == "humn" {
        return true;
    }
    match troop.get(name) {
        Some(Job::Operation(left, _, right)) => {
            depends_on_humn(troop, left) || depends_on_humn(troop, right)
        }
        _ => false,
    }
}

/// Find the value `name` must produce so the subtree equals `target`.
fn solve_for_humn(troop: &Troop, name: &str, target: i64) -> Result<i64> {
    if name == "humn" {
        return Ok(target);
    }
    let Some(Job::Operation(left, op, right)) = troop.get(name) else {
        return Err(Error::NoSolution);
    };

    if depends_on_humn(troop, left) {
        let known = eval(troop, right)?;
        let next_target = match op {
            BinOp::Add => target - known,
            BinOp::Sub => target + known,
            BinOp::Mul => target / known,
            BinOp::Div => target * known,
        };
        solve_for_humn(troop, left, next_target)
    } else {
        let known = eval(troop, left)?;
        let next_target = match op {
            BinOp::Add => target - known,
            BinOp::Sub => known - target,
            BinOp::Mul => target / known,
            BinOp::Div => known / target,
        };
        solve_for_humn(troop, right, next_target)
    }
}

pub fn part2(input: &str) -> Result<i64> {
    let troop = parse(input)?;
    let Some(Job::Operation(left, _, right)) = troop.get("root") else {
        return Err(Error::NoSolution);
    };

    if depends_on_humn(&troop, left) {
        let target = eval(&troop, right)?;
        solve_for_humn(&troop, left, target)
    } else {
        let target = eval(&troop, left)?;
        solve_for_humn(&troop, right, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzx * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzx: hmdt - zczc
hmdt: 32";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 152);
    }

    #[test]
    fn example_part2() {
        assert_eq!(part2(EXAMPLE).unwrap(), 301);
    }
}
