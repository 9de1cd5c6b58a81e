use std::str::FromStr;

use eyre::Result;

use super::error::Error;
use super::state::UNKNOWN_CHROM;

pub const CHROM: &str = "chrom=";
pub const SPAN: &str = "span=";
pub const START: &str = "start=";
pub const STEP: &str = "step=";

/// Stepping mode declared by a section header
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Step {
    Variable,
    Fixed { start: u64, step: u64 },
}

/// Parsed section header with the mode-specific defaults already applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Header<'a> {
    pub chrom: &'a str,
    pub span: u64,
    pub step: Step,
}

/// Value of the `key` (including the trailing '=') in the line: the first whitespace-delimited
/// token after the LAST occurrence of the key. Returns None if the key is absent or nothing
/// follows it.
pub fn field<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let at = line.rfind(key)?;
    line[at + key.len()..].split_whitespace().next()
}

pub(crate) fn number<T: FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse::<T>().map_err(|_| {
        Error::UnparsableNumber {
            line,
            token: token.to_owned(),
        }
        .into()
    })
}

fn span(header: &str, line: usize) -> Result<u64> {
    Ok(field(header, SPAN)
        .map(|token| number(token, line))
        .transpose()?
        .unwrap_or(0))
}

fn required<'a>(header: &'a str, key: &'static str, line: usize) -> Result<&'a str> {
    field(header, key).ok_or_else(|| {
        Error::MissingField {
            line,
            key: key.trim_end_matches('='),
        }
        .into()
    })
}

/// Parse a `variableStep` header. Both `chrom=` and `span=` are optional.
pub fn variable_step(header: &str, line: usize) -> Result<Header<'_>> {
    let chrom = field(header, CHROM).unwrap_or(UNKNOWN_CHROM);
    let span = span(header, line)?;
    Ok(Header {
        chrom,
        span,
        step: Step::Variable,
    })
}

/// Parse a `fixedStep` header. `chrom=`, `start=` and `step=` are required, `span=` is optional.
pub fn fixed_step(header: &str, line: usize) -> Result<Header<'_>> {
    let chrom = required(header, CHROM, line)?;
    let span = span(header, line)?;

    let start = number::<i64>(required(header, START, line)?, line)?;
    if start < 1 {
        return Err(Error::InvalidStart { line, start }.into());
    }

    let step = number::<i64>(required(header, STEP, line)?, line)?;
    if step < 1 {
        return Err(Error::InvalidStep { line, step }.into());
    }

    Ok(Header {
        chrom,
        span,
        step: Step::Fixed {
            start: start as u64,
            step: step as u64,
        },
    })
}
