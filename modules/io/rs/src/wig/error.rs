use derive_more::{Display, Error};

/// Fatal WIG parsing errors. Line numbers are 1-based.
///
/// Malformed `variableStep` data lines are not errors: they are reported and skipped, see
/// [crate::wig::ParseSummary::skipped].
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum Error {
    #[display("line {line}: fixedStep header must define {key}=")]
    MissingField { line: usize, key: &'static str },
    #[display("line {line}: fixedStep start must be bigger than 0, got {start}")]
    InvalidStart { line: usize, start: i64 },
    #[display("line {line}: fixedStep step must be bigger than 0, got {step}")]
    InvalidStep { line: usize, step: i64 },
    /// Positions and spans are non-negative integers, values are floats. A token outside of
    /// these domains (e.g. a negative position) is reported here.
    #[display("line {line}: failed to parse number {token:?} (integers must be non-negative)")]
    UnparsableNumber { line: usize, token: String },
}

impl Error {
    pub fn line(&self) -> usize {
        match self {
            Error::MissingField { line, .. }
            | Error::InvalidStart { line, .. }
            | Error::InvalidStep { line, .. }
            | Error::UnparsableNumber { line, .. } => *line,
        }
    }
}
