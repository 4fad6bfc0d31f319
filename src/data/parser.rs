use std::num::ParseFloatError;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Adjacency-list text format
// ---------------------------------------------------------------------------
//
//   Node: <id>
//   <neighbor-id> <weight>
//   <neighbor-id> <weight>
//   Node: <id2>
//   ...

const NODE_HEADER: &str = "Node:";

/// A weight token that is not a floating-point number.
#[derive(Debug, Error)]
#[error("line {line_no}: weight {token:?} is not a number (in {line:?})")]
pub struct ParseError {
    /// 1-based line number.
    pub line_no: usize,
    pub line: String,
    pub token: String,
    #[source]
    pub source: ParseFloatError,
}

/// One `(node, neighbor, weight)` triple in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// How a single trimmed line is classified.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Blank,
    Header(&'a str),
    Pair { target: &'a str, weight: &'a str },
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(rest) = line.strip_prefix(NODE_HEADER) {
        // Only the segment up to a further ':' names the node.
        let id = rest.split(':').next().unwrap_or("").trim();
        return Line::Header(id);
    }
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(target), Some(weight), None) => Line::Pair { target, weight },
        _ => Line::Other,
    }
}

/// Parser state: which `Node:` block edge lines belong to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    NoActiveNode,
    ActiveNode(String),
}

/// Line-driven state machine turning the adjacency-list format into edge
/// records.
#[derive(Debug, Default)]
pub struct FormatParser {
    state: ParserState,
    line_no: usize,
}

impl FormatParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// Feed one raw line. Returns the edge it describes, if any.
    pub fn feed(&mut self, raw: &str) -> Result<Option<EdgeRecord>, ParseError> {
        self.line_no += 1;
        let line = raw.trim();
        match classify(line) {
            Line::Blank | Line::Other => Ok(None),
            Line::Header(id) => {
                // An empty id leaves no usable block open.
                self.state = if id.is_empty() {
                    ParserState::NoActiveNode
                } else {
                    ParserState::ActiveNode(id.to_string())
                };
                Ok(None)
            }
            Line::Pair { target, weight } => {
                let ParserState::ActiveNode(source) = &self.state else {
                    return Ok(None);
                };
                let weight = weight.parse::<f64>().map_err(|err| ParseError {
                    line_no: self.line_no,
                    line: line.to_string(),
                    token: weight.to_string(),
                    source: err,
                })?;
                Ok(Some(EdgeRecord {
                    source: source.clone(),
                    target: target.to_string(),
                    weight,
                }))
            }
        }
    }
}

/// Parse a sequence of lines into edge records, stopping at the first
/// malformed weight.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<EdgeRecord>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = FormatParser::new();
    let mut records = Vec::new();
    for line in lines {
        if let Some(record) = parser.feed(line.as_ref())? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse a whole document held in memory.
pub fn parse_str(text: &str) -> Result<Vec<EdgeRecord>, ParseError> {
    parse_lines(text.lines())
}
