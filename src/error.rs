/// Errors shared by every day's solver.
///
/// Puzzle inputs are trusted to be well-formed in the happy path, but parsers
/// still report what they choked on rather than panicking.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed input line: {0:?}")]
    BadLine(String),
    #[error("invalid number: {0}")]
    BadNumber(#[from] std::num::ParseIntError),
    #[error("search exhausted without finding a solution")]
    NoSolution,
    #[error("day {day} has no part {part}")]
    NoSuchPart { day: u8, part: u8 },
}

impl Error {
    /// Shorthand for flagging the line a parser could not handle.
    pub fn bad_line(line: impl Into<String>) -> Self {
        Error::BadLine(line.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
