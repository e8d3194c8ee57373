//! Day 10: Cathode-Ray Tube.

use crate::error::{Error, Result};

/// The CRT: one pixel per cycle, lit when the three-wide sprite centered on
/// the X register overlaps the beam position.
struct Crt {
    register: i64,
    position: i64,
    image: String,
}

impl Crt {
    fn new() -> Self {
        Crt {
            register: 1,
            position: 0,
            image: String::new(),
        }
    }

    fn tick(&mut self) {
        if (self.register - self.position).abs() <= 1 {
            self.image.push('#');
        } else {
            self.image.push('.');
        }
        self.position += 1;
        if self.position == 40 {
            self.image.push('\n');
            self.position = 0;
        }
    }

    fn noop(&mut self) {
        self.tick();
    }

    fn addx(&mut self, value: i64) {
        self.tick();
        self.tick();
        self.register += value;
    }
}

pub fn part2(input: &str) -> Result<String> {
    let mut crt = Crt::new();
    for line in input.lines() {
        if line == "noop" {
            crt.noop();
        } else if let Some(value) = line.strip_prefix("addx ") {
            crt.addx(value.parse()?);
        } else {
            return Err(Error::bad_line(line));
        }
    }
    Ok(crt.image)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWER: &str = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....
";

    #[test]
    fn example() {
        assert_eq!(part2(EXAMPLE).unwrap(), ANSWER);
    }

    const EXAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop";
}
