use derive_getters::{Dissolve, Getters};
use eyre::{Result, WrapErr};

use super::header;
use super::line::{classify, LineKind};
use super::sink::Sink;
use super::state::State;
use crate::LineSource;

/// A data line that was skipped because it could not be interpreted.
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve)]
pub struct SkippedLine {
    line: usize,
    content: String,
}

/// Outcome of a single parsing pass
#[derive(Clone, PartialEq, Eq, Debug, Getters, Dissolve)]
pub struct ParseSummary {
    /// Number of lines read
    lines: usize,
    /// Number of points passed to the sink
    points: usize,
    skipped: Vec<SkippedLine>,
    /// Span of the last section
    span: u64,
    /// Chromosome of the last section
    chrom: String,
}

/// Drive the WIG state machine over all lines of the source, reporting headers and data points to
/// the sink. The source is read until exhausted, it's not rewound here.
///
/// Header errors and unparsable numbers abort the pass. `variableStep` data lines without exactly
/// two tokens are logged, recorded in the summary and skipped.
pub fn parse<S, K>(source: &mut S, sink: &mut K) -> Result<ParseSummary>
where
    S: LineSource + ?Sized,
    K: Sink + ?Sized,
{
    let mut state = State::new();
    let mut buffer = String::new();
    let mut lines = 0;
    let mut points = 0;
    let mut skipped = Vec::new();

    loop {
        buffer.clear();
        if source
            .read_line(&mut buffer)
            .wrap_err_with(|| format!("Failed to read WIG line {}", lines + 1))?
            == 0
        {
            break;
        }
        lines += 1;

        let line = buffer.trim_end_matches(|c| c == '\n' || c == '\r');
        match classify(line) {
            LineKind::Track | LineKind::Comment | LineKind::Browser | LineKind::Blank => {}
            LineKind::VariableStep => {
                let header = header::variable_step(line, lines)?;
                state.enter(&header);
                sink.header(&header)
                    .wrap_err_with(|| format!("Failed to store WIG header at line {lines}"))?;
            }
            LineKind::FixedStep => {
                let header = header::fixed_step(line, lines)?;
                state.enter(&header);
                sink.header(&header)
                    .wrap_err_with(|| format!("Failed to store WIG header at line {lines}"))?;
            }
            LineKind::Data => {
                let mode = state.mode();
                match state.point(line, lines)? {
                    Some(point) => {
                        sink.point(point)
                            .wrap_err_with(|| format!("Failed to store WIG line {lines}"))?;
                        points += 1;
                    }
                    None => {
                        log::warn!("Skipping malformed WIG data line {lines} ({mode:?}): {line:?}");
                        skipped.push(SkippedLine {
                            line: lines,
                            content: line.to_owned(),
                        });
                    }
                }
            }
        }
    }

    Ok(ParseSummary {
        lines,
        points,
        skipped,
        span: state.span(),
        chrom: state.chrom().to_owned(),
    })
}
