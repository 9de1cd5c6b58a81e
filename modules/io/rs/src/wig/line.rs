/// Kind of a single WIG line
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LineKind {
    Track,
    Comment,
    Browser,
    VariableStep,
    FixedStep,
    Blank,
    Data,
}

/// Classify a line (without the line terminator) by its prefix. The order of checks matters:
/// metadata prefixes win over section headers, anything else that isn't blank is data.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("track") {
        LineKind::Track
    } else if line.starts_with('#') {
        LineKind::Comment
    } else if line.starts_with("browse") {
        LineKind::Browser
    } else if line.starts_with("variableStep") {
        LineKind::VariableStep
    } else if line.starts_with("fixedStep") {
        LineKind::FixedStep
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Data
    }
}
