//! Day 2: Rock Paper Scissors.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The score of the round outcome from our point of view.
    fn outcome_against(self, opponent: Shape) -> u64 {
        if self == opponent {
            return 3;
        }
        let won = matches!(
            (self, opponent),
            (Shape::Rock, Shape::Scissors)
                | (Shape::Paper, Shape::Rock)
                | (Shape::Scissors, Shape::Paper)
        );
        if won {
            6
        } else {
            0
        }
    }
}

fn decode(letter: &str) -> Result<Shape> {
    match letter {
        "A" | "X" => Ok(Shape::Rock),
        "B" | "Y" => Ok(Shape::Paper),
        "C" | "Z" => Ok(Shape::Scissors),
        other => Err(Error::bad_line(other)),
    }
}

pub fn part1(input: &str) -> Result<u64> {
    let mut score = 0;
    for line in input.lines() {
        let (opp, me) = line.split_once(' ').ok_or_else(|| Error::bad_line(line))?;
        let opp = decode(opp)?;
        let me = decode(me)?;
        score += me.score() + me.outcome_against(opp);
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        assert_eq!(part1("A Y\nB X\nC Z").unwrap(), 15);
    }
}
