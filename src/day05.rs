//! Day 5: Supply Stacks.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct Instruction {
    move_qty: usize,
    source: usize,
    dest: usize,
}

fn parse_instruction(line: &str) -> Result<Instruction> {
    // move 3 from 1 to 2
    let mut numbers = line
        .split_whitespace()
        .filter_map(|word| word.parse::<usize>().ok());
    let (Some(move_qty), Some(source), Some(dest)) =
        (numbers.next(), numbers.next(), numbers.next())
    else {
        return Err(Error::bad_line(line));
    };
    Ok(Instruction {
        move_qty,
        source,
        dest,
    })
}

/// Parse the crate drawing into stacks, bottom crate first.
fn parse_stacks(drawing: &str) -> Result<Vec<Vec<char>>> {
    let mut lines: Vec<&str> = drawing.lines().collect();
    let labels = lines.pop().ok_or_else(|| Error::bad_line(drawing))?;
    let nstacks = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); nstacks];

    for line in lines.iter().rev() {
        let row: Vec<char> = line.chars().collect();
        for (stack, chunk) in stacks.iter_mut().zip(row.chunks(4)) {
            // each cell is "[X] " or blank padding
            if let Some(&label) = chunk.get(1) {
                if label != ' ' {
                    stack.push(label);
                }
            }
        }
    }
    Ok(stacks)
}

fn parse(input: &str) -> Result<(Vec<Vec<char>>, Vec<Instruction>)> {
    let (drawing, moves) = input
        .split_once("\n\n")
        .ok_or_else(|| Error::bad_line(input))?;
    let stacks = parse_stacks(drawing)?;
    let todo_list = moves.lines().map(parse_instruction).collect::<Result<_>>()?;
    Ok((stacks, todo_list))
}

/// CrateMover 9001 lifts all crates at once, preserving their order.
pub fn part2(input: &str) -> Result<String> {
    let (mut stacks, todo_list) = parse(input)?;
    for item in todo_list {
        let source = stacks
            .get_mut(item.source - 1)
            .ok_or(Error::NoSolution)?;
        let at = source.len().checked_sub(item.move_qty).ok_or(Error::NoSolution)?;
        let removed: Vec<char> = source.split_off(at);
        stacks
            .get_mut(item.dest - 1)
            .ok_or(Error::NoSolution)?
            .extend(removed);
    }
    Ok(stacks.iter().filter_map(|stack| stack.last()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "    [D]    \n\
[N] [C]    \n\
[Z] [M] [P]\n \
1   2   3 \n\
\n\
move 1 from 2 to 1\n\
move 3 from 1 to 3\n\
move 2 from 2 to 1\n\
move 1 from 1 to 2";

    #[test]
    fn stacks_from_drawing() {
        let (stacks, _) = parse(EXAMPLE).unwrap();
        assert_eq!(stacks, vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
    }

    #[test]
    fn example() {
        assert_eq!(part2(EXAMPLE).unwrap(), "MCD");
    }
}
