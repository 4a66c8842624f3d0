use log::debug;
use nom::IResult;
use nom::Parser;
use nom::character::complete::{digit1, one_of, space1};
use nom::combinator::{map_res, opt, rest};
use proxyprint_types::Diagnostic;

/// One decklist line, classified. The `Skipped` arm is deliberate leniency:
/// lines that do not look like a card entry are dropped, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEntry<'a> {
    Matched { count: u32, name: &'a str },
    Skipped,
}

#[derive(Debug, Default)]
pub struct ParsedDecklist {
    /// Card names in input order, one entry per requested copy.
    pub cards: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDecklist {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Leading `<count>` or `<count>x`, followed by at least one space.
fn count_prefix(input: &str) -> IResult<&str, u32> {
    let (input, count) = map_res(digit1, str::parse::<u32>).parse(input)?;
    let (input, _) = opt(one_of("xX")).parse(input)?;
    let (input, _) = space1(input)?;
    Ok((input, count))
}

/// Classifies a trimmed, non-empty, non-comment line.
///
/// A missing count defaults to 1, since decklists commonly omit it for
/// singletons. A stray count with no name ("4") is skipped rather than
/// treated as a card called "4".
pub fn classify_line(line: &str) -> LineEntry<'_> {
    let parsed: IResult<&str, (Option<u32>, &str)> = (opt(count_prefix), rest).parse(line);
    match parsed {
        Ok((_, (Some(count), name))) => {
            let name = name.trim();
            if name.is_empty() {
                LineEntry::Skipped
            } else {
                LineEntry::Matched { count, name }
            }
        }
        Ok((_, (None, name))) => {
            let name = name.trim();
            if name.is_empty() || name.chars().all(|c| c.is_ascii_digit()) {
                LineEntry::Skipped
            } else {
                LineEntry::Matched { count: 1, name }
            }
        }
        Err(_) => LineEntry::Skipped,
    }
}

/// Splits a trailing `(SETCODE) COLLECTOR` export annotation off a card
/// name. Returns the bare name and the removed annotation, or `None` when
/// the name carries no such suffix. The set code may be empty and the
/// collector number may contain hyphens, matching real Manabox exports.
fn strip_set_annotation(raw: &str) -> Option<(&str, &str)> {
    let (head, collector) = raw.rsplit_once(char::is_whitespace)?;
    if collector.is_empty()
        || !collector
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return None;
    }
    let head = head.trim_end();
    let (name, set_token) = head.rsplit_once(char::is_whitespace)?;
    let code = set_token.strip_prefix('(')?.strip_suffix(')')?;
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return None;
    }
    let name = name.trim_end();
    if name.is_empty() {
        return None;
    }
    Some((name, raw[name.len()..].trim_start()))
}

/// Parses a whole decklist into an expanded card-name sequence.
///
/// Output length equals the sum of the counts of all matched lines; copies
/// from one line are contiguous and line order is preserved. Blank and
/// comment lines are skipped silently, other unrecognized lines with a
/// diagnostic.
pub fn parse_decklist(text: &str) -> ParsedDecklist {
    let mut cards = Vec::new();
    let mut diagnostics = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        match classify_line(line) {
            LineEntry::Skipped => {
                debug!("line {line_no}: no card entry in '{line}'");
                diagnostics.push(Diagnostic::LineIgnored {
                    line: line_no,
                    content: line.to_string(),
                });
            }
            LineEntry::Matched { count, name } => {
                let name = match strip_set_annotation(name) {
                    Some((base, annotation)) => {
                        debug!("line {line_no}: stripped '{annotation}'");
                        diagnostics.push(Diagnostic::AnnotationStripped {
                            line: line_no,
                            annotation: annotation.to_string(),
                        });
                        base
                    }
                    None => name,
                };
                cards.extend(std::iter::repeat_n(name.to_string(), count as usize));
            }
        }
    }

    ParsedDecklist { cards, diagnostics }
}
