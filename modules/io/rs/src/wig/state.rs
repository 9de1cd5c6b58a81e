use eyre::Result;

use super::header::{number, Header, Step};

/// Chromosome assigned to data lines before any header names one.
pub const UNKNOWN_CHROM: &str = "Unknown";

/// Interpretation of data lines
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Mode {
    /// Each data line is `<position> <value>`
    #[default]
    VariableStep,
    /// Each data line is `<value>` placed at `next`, which then advances by `step`
    FixedStep { next: u64, step: u64 },
}

/// A single data value emitted by the parser
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DataPoint<'a> {
    pub chrom: &'a str,
    pub position: u64,
    pub value: f64,
    /// Span declared by the header of the current block
    pub span: u64,
}

/// Mutable parser state, one instance per parsing pass.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct State {
    chrom: String,
    span: u64,
    mode: Mode,
}

impl Default for State {
    fn default() -> Self {
        Self {
            chrom: UNKNOWN_CHROM.to_owned(),
            span: 0,
            mode: Mode::VariableStep,
        }
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn span(&self) -> u64 {
        self.span
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Start a new section. Chromosome, span and mode are all overwritten by the header.
    pub fn enter(&mut self, header: &Header<'_>) {
        self.chrom.clear();
        self.chrom.push_str(header.chrom);
        self.span = header.span;
        self.mode = match header.step {
            Step::Variable => Mode::VariableStep,
            Step::Fixed { start, step } => Mode::FixedStep { next: start, step },
        };
    }

    /// Interpret a data line under the current mode.
    ///
    /// Returns `Ok(None)` for `variableStep` lines that don't consist of exactly two tokens: such
    /// lines are recoverable and should be skipped by the caller. Unparsable numbers are errors.
    pub fn point(&mut self, data: &str, line: usize) -> Result<Option<DataPoint<'_>>> {
        let (position, value) = match &mut self.mode {
            Mode::FixedStep { next, step } => {
                let value = number::<f64>(data.trim(), line)?;
                let position = *next;
                *next = next.saturating_add(*step);
                (position, value)
            }
            Mode::VariableStep => {
                let mut tokens = data.split_whitespace();
                match (tokens.next(), tokens.next(), tokens.next()) {
                    (Some(position), Some(value), None) => {
                        (number::<u64>(position, line)?, number::<f64>(value, line)?)
                    }
                    _ => return Ok(None),
                }
            }
        };

        Ok(Some(DataPoint {
            chrom: &self.chrom,
            position,
            value,
            span: self.span,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wig::header;
    use crate::wig::Error;

    #[test]
    fn test_default_state() -> Result<()> {
        let mut state = State::new();
        assert_eq!(state.chrom(), UNKNOWN_CHROM);
        assert_eq!(state.span(), 0);
        assert_eq!(state.mode(), Mode::VariableStep);

        let point = state.point("15 0.5", 1)?;
        assert_eq!(
            point,
            Some(DataPoint {
                chrom: UNKNOWN_CHROM,
                position: 15,
                value: 0.5,
                span: 0
            })
        );
        Ok(())
    }

    #[test]
    fn test_fixed_step_positions() -> Result<()> {
        let mut state = State::new();
        state.enter(&header::fixed_step(
            "fixedStep chrom=chr2 start=10 step=2 span=2",
            1,
        )?);

        let mut positions = Vec::new();
        for value in ["0.1", " 0.2 ", "0.3"] {
            let point = state.point(value, 2)?.ok_or_else(|| eyre::eyre!("No point"))?;
            assert_eq!(point.chrom, "chr2");
            assert_eq!(point.span, 2);
            positions.push(point.position);
        }
        assert_eq!(positions, [10, 12, 14]);
        assert_eq!(state.mode(), Mode::FixedStep { next: 16, step: 2 });
        Ok(())
    }

    #[test]
    fn test_headers_reset_state() -> Result<()> {
        let mut state = State::new();
        state.enter(&header::fixed_step(
            "fixedStep chrom=chr2 start=10 step=2 span=7",
            1,
        )?);
        state.enter(&header::variable_step("variableStep", 2)?);

        assert_eq!(state.chrom(), UNKNOWN_CHROM);
        assert_eq!(state.span(), 0);
        assert_eq!(state.mode(), Mode::VariableStep);
        Ok(())
    }

    #[test]
    fn test_malformed_and_unparsable_lines() -> Result<()> {
        let mut state = State::new();
        assert_eq!(state.point("100", 1)?, None);
        assert_eq!(state.point("100 1.5 extra", 2)?, None);

        let err = state.point("100 high", 3).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnparsableNumber {
                line: 3,
                token: "high".to_owned()
            })
        );

        // Negative positions can't be represented
        let err = state.point("-5 1.0", 4).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::UnparsableNumber {
                line: 4,
                token: "-5".to_owned()
            })
        );
        assert!(err.to_string().contains("must be non-negative"));

        state.enter(&header::fixed_step("fixedStep chrom=chr1 start=1 step=1", 5)?);
        assert!(state.point("100 1.5", 6).is_err());
        Ok(())
    }
}
