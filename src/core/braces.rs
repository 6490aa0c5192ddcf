//! Brace expansion
//!
//! Expands shell-style alternations such as `~/{Downloads,Pictures}/*.{jpg,png}`
//! into every string they describe. Groups may nest and alternatives may be
//! empty (`e{d,}` yields `ed` and `e`).
//!
//! Outside of a group, `,` and a stray `}` are plain text. An opening brace
//! that is never closed is an error.

use crate::error::BraceError;

/// Parsed fragment of a brace pattern
#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Text copied as-is
    Literal(String),
    /// One of several alternative sequences
    Alternation(Vec<Vec<Part>>),
}

/// Expand all brace groups in `input`
///
/// Alternatives are emitted left to right, with earlier groups varying
/// slowest. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use katas::core::braces::expand_braces;
///
/// let expanded = expand_braces("thumbnail.{png,jp{e,}g}").unwrap();
/// assert_eq!(expanded, vec!["thumbnail.png", "thumbnail.jpeg", "thumbnail.jpg"]);
/// ```
pub fn expand_braces(input: &str) -> Result<Vec<String>, BraceError> {
    let chars: Vec<char> = input.chars().collect();
    let mut parser = Parser {
        chars: &chars,
        pos: 0,
    };
    let parts = parser.parse_top_level()?;
    let expanded = expand_sequence(&parts);

    tracing::debug!("Expanded '{input}' into {} strings", expanded.len());

    Ok(expanded)
}

/// Recursive-descent parser over the pattern characters
struct Parser<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Parser<'_> {
    fn parse_top_level(&mut self) -> Result<Vec<Part>, BraceError> {
        let mut parts = Vec::new();
        let mut literal = String::new();

        while let Some(&c) = self.chars.get(self.pos) {
            if c == '{' {
                flush(&mut literal, &mut parts);
                parts.push(self.parse_group()?);
            } else {
                literal.push(c);
                self.pos += 1;
            }
        }
        flush(&mut literal, &mut parts);

        Ok(parts)
    }

    /// Parse a group starting at the current `{`, consuming its closing `}`
    fn parse_group(&mut self) -> Result<Part, BraceError> {
        let open = self.pos;
        self.pos += 1;

        let mut alternatives = Vec::new();
        let mut parts = Vec::new();
        let mut literal = String::new();

        loop {
            match self.chars.get(self.pos) {
                None => return Err(BraceError::Unbalanced { position: open }),
                Some('{') => {
                    flush(&mut literal, &mut parts);
                    parts.push(self.parse_group()?);
                }
                Some(',') => {
                    flush(&mut literal, &mut parts);
                    alternatives.push(std::mem::take(&mut parts));
                    self.pos += 1;
                }
                Some('}') => {
                    flush(&mut literal, &mut parts);
                    alternatives.push(parts);
                    self.pos += 1;
                    return Ok(Part::Alternation(alternatives));
                }
                Some(&c) => {
                    literal.push(c);
                    self.pos += 1;
                }
            }
        }
    }
}

fn flush(literal: &mut String, parts: &mut Vec<Part>) {
    if !literal.is_empty() {
        parts.push(Part::Literal(std::mem::take(literal)));
    }
}

/// Cartesian product of every part in the sequence
fn expand_sequence(parts: &[Part]) -> Vec<String> {
    parts.iter().fold(vec![String::new()], |prefixes, part| {
        let suffixes = match part {
            Part::Literal(text) => vec![text.clone()],
            Part::Alternation(alternatives) => alternatives
                .iter()
                .map(Vec::as_slice)
                .flat_map(expand_sequence)
                .collect(),
        };
        prefixes
            .iter()
            .flat_map(|prefix| suffixes.iter().map(move |suffix| format!("{prefix}{suffix}")))
            .collect()
    })
}
