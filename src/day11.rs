//! Day 11: Monkey in the Middle.
//!
//! A tiny interpreter for the monkeys' item-inspection rules. Part 2 drops
//! the worry-relief division, so worry levels are reduced modulo the product
//! of every monkey's test divisor to keep them bounded.

use std::collections::VecDeque;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
enum Op {
    Add(u64),
    Mul(u64),
    Square,
}

impl Op {
    fn apply(self, old: u64) -> u64 {
        match self {
            Op::Add(value) => old + value,
            Op::Mul(value) => old * value,
            Op::Square => old * old,
        }
    }
}

#[derive(Debug)]
struct Monkey {
    items: VecDeque<u64>,
    op: Op,
    test_divisor: u64,
    true_friend: usize,
    false_friend: usize,
    activity: u64,
}

fn last_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(line: &str) -> Result<T> {
    let word = line
        .split_whitespace()
        .last()
        .ok_or_else(|| Error::bad_line(line))?;
    Ok(word.parse()?)
}

fn parse_monkey(block: &str) -> Result<Monkey> {
    let mut lines = block.lines();
    let mut next_line = || lines.next().ok_or_else(|| Error::bad_line(block));

    // Monkey N:
    next_line()?;

    let items = next_line()?
        .split_once(':')
        .ok_or_else(|| Error::bad_line(block))?
        .1
        .split(',')
        .map(|item| Ok(item.trim().parse()?))
        .collect::<Result<VecDeque<u64>>>()?;

    // Operation: new = old <op> <operand>
    let operation = next_line()?;
    let mut op_words = operation.split_whitespace().rev();
    let (Some(operand), Some(operator)) = (op_words.next(), op_words.next()) else {
        return Err(Error::bad_line(operation));
    };
    let op = match (operator, operand) {
        ("*", "old") => Op::Square,
        ("*", value) => Op::Mul(value.parse()?),
        ("+", value) => Op::Add(value.parse()?),
        _ => return Err(Error::bad_line(operation)),
    };

    let test_divisor = last_number(next_line()?)?;
    let true_friend = last_number(next_line()?)?;
    let false_friend = last_number(next_line()?)?;

    Ok(Monkey {
        items,
        op,
        test_divisor,
        true_friend,
        false_friend,
        activity: 0,
    })
}

fn parse(input: &str) -> Result<Vec<Monkey>> {
    let monkeys: Vec<Monkey> = input.split("\n\n").map(parse_monkey).collect::<Result<_>>()?;
    if monkeys.len() < 2 {
        return Err(Error::bad_line("at least two monkeys expected"));
    }
    // a throw must land on some other monkey or the game never ends
    for (idx, monkey) in monkeys.iter().enumerate() {
        for friend in [monkey.true_friend, monkey.false_friend] {
            if friend >= monkeys.len() || friend == idx {
                return Err(Error::bad_line(format!(
                    "monkey {idx} throws to monkey {friend}"
                )));
            }
        }
    }
    Ok(monkeys)
}

/// Relief applied to a worry level after a monkey inspects the item.
#[derive(Debug, Clone, Copy)]
enum Relief {
    DivideByThree,
    Modulo(u64),
}

fn play(monkeys: &mut [Monkey], rounds: u64, relief: Relief) {
    for _ in 0..rounds {
        for idx in 0..monkeys.len() {
            while let Some(item) = monkeys[idx].items.pop_front() {
                let monkey = &mut monkeys[idx];
                monkey.activity += 1;
                let worry = match relief {
                    Relief::DivideByThree => monkey.op.apply(item) / 3,
                    Relief::Modulo(product) => monkey.op.apply(item) % product,
                };
                let target = if worry % monkey.test_divisor == 0 {
                    monkey.true_friend
                } else {
                    monkey.false_friend
                };
                monkeys[target].items.push_back(worry);
            }
        }
    }
}

/// Product of the two largest inspection counts.
fn monkey_business(monkeys: &[Monkey]) -> u64 {
    let mut activity: Vec<u64> = monkeys.iter().map(|monkey| monkey.activity).collect();
    activity.sort_unstable();
    activity[activity.len() - 1] * activity[activity.len() - 2]
}

pub fn part1(input: &str) -> Result<u64> {
    let mut monkeys = parse(input)?;
    play(&mut monkeys, 20, Relief::DivideByThree);
    Ok(monkey_business(&monkeys))
}

pub fn part2(input: &str, rounds: u64) -> Result<u64> {
    let mut monkeys = parse(input)?;
    let product: u64 = monkeys.iter().map(|monkey| monkey.test_divisor).product();
    play(&mut monkeys, rounds, Relief::Modulo(product));
    Ok(monkey_business(&monkeys))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const EXAMPLE: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    #[test]
    fn example_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), 10605);
    }

    #[test]
    fn out_of_range_throw_target_is_rejected() {
        let bad = EXAMPLE.replace("throw to monkey 3", "throw to monkey 9");
        assert!(part1(&bad).is_err());
    }

    #[test]
    fn self_throw_is_rejected() {
        // monkey 3 throwing to itself would juggle one item forever
        let bad = EXAMPLE.replace("If true: throw to monkey 0", "If true: throw to monkey 3");
        assert!(part1(&bad).is_err());
    }

    #[test]
    fn lone_monkey_is_rejected() {
        let first_block = EXAMPLE.split("\n\n").next().unwrap();
        assert!(part1(first_block).is_err());
    }

    #[rstest]
    #[case(20, 103 * 99)]
    #[case(1000, 5204 * 5192)]
    #[case(10_000, 2713310158)]
    fn example_part2(#[case] rounds: u64, #[case] expected: u64) {
        assert_eq!(part2(EXAMPLE, rounds).unwrap(), expected);
    }
}
