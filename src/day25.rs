//! Day 25: Full of Hot Air.
//!
//! SNAFU numbers are balanced base five: digits 2, 1, 0, - (minus one)
//! and = (minus two).

use crate::error::{Error, Result};

fn digit_value(digit: char) -> Result<i64> {
    match digit {
        '=' => Ok(-2),
        '-' => Ok(-1),
        '0' => Ok(0),
        '1' => Ok(1),
        '2' => Ok(2),
        other => Err(Error::bad_line(other.to_string())),
    }
}

pub fn snafu_to_decimal(snafu: &str) -> Result<i64> {
    let mut value = 0;
    for digit in snafu.trim().chars() {
        value = value * 5 + digit_value(digit)?;
    }
    Ok(value)
}

pub fn decimal_to_snafu(mut value: i64) -> String {
    if value == 0 {
        return "0".to_owned();
    }
    let mut digits = Vec::new();
    while value != 0 {
        // remainders 3 and 4 become -2 and -1 with a carry
        let remainder = value.rem_euclid(5);
        let (digit, carry) = match remainder {
            3 => ('=', 1),
            4 => ('-', 1),
            0 => ('0', 0),
            1 => ('1', 0),
            _ => ('2', 0),
        };
        digits.push(digit);
        value = value / 5 + carry;
    }
    digits.iter().rev().collect()
}

pub fn part1(input: &str) -> Result<String> {
    let mut total = 0;
    for line in input.lines() {
        total += snafu_to_decimal(line)?;
    }
    Ok(decimal_to_snafu(total))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "0")]
    #[case(1, "1")]
    #[case(2, "2")]
    #[case(3, "1=")]
    #[case(4, "1-")]
    #[case(5, "10")]
    #[case(6, "11")]
    #[case(7, "12")]
    #[case(8, "2=")]
    #[case(9, "2-")]
    #[case(10, "20")]
    #[case(15, "1=0")]
    #[case(20, "1-0")]
    #[case(2022, "1=11-2")]
    #[case(12345, "1-0---0")]
    #[case(314159265, "1121-1110-1=0")]
    fn decimal_snafu_round_trips(#[case] decimal: i64, #[case] snafu: &str) {
        assert_eq!(snafu_to_decimal(snafu).unwrap(), decimal);
        assert_eq!(decimal_to_snafu(decimal), snafu);
    }

    #[rstest]
    #[case("1=-0-2", 1747)]
    #[case("12111", 906)]
    #[case("2=0=", 198)]
    #[case("2=-01", 976)]
    #[case("21", 11)]
    #[case("2=01", 201)]
    #[case("111", 31)]
    #[case("20012", 1257)]
    #[case("112", 32)]
    #[case("1=-1=", 353)]
    #[case("1-12", 107)]
    #[case("12", 7)]
    #[case("1=", 3)]
    #[case("122", 37)]
    fn snafu_decimal_round_trips(#[case] snafu: &str, #[case] decimal: i64) {
        assert_eq!(snafu_to_decimal(snafu).unwrap(), decimal);
        assert_eq!(decimal_to_snafu(decimal), snafu);
    }

    #[test]
    fn example_sum() {
        let input = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122";
        assert_eq!(part1(input).unwrap(), "2=-1=0");
    }
}
