//! Commit message parsing.
//!
//! Splits a raw commit message into a summary line, a free-form body and the
//! trailing trailer block, following the Git trailer convention: trailers are
//! the maximal tail run of `key: value` lines separated from the body by a
//! blank line. Parsing is total; text that does not form a valid trailer
//! block is body, never an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TRAILER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<key>[A-Za-z0-9-]+):\s*(?P<value>.*)$").expect("invalid regex")
});

/// A single `key: value` entry from a commit message trailer block.
///
/// Trailers are owned by their message; duplicate keys are allowed and kept
/// in appearance order. Flagging duplicates is a rule concern, not a parser
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    /// The trailer key (letters, digits and `-`).
    pub key: String,

    /// The trailer value, possibly empty. Continuation lines are folded in
    /// with their leading whitespace collapsed to a single space.
    pub value: String,
}

impl Trailer {
    /// Creates a new trailer.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A commit message split per the trailer convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// The first line of the message, possibly empty.
    pub summary: String,

    /// Free-form text between the summary and the trailer block, with
    /// surrounding blank lines trimmed.
    pub body: String,

    /// Trailers in appearance order.
    pub trailers: Vec<Trailer>,
}

impl ParsedMessage {
    /// Parses a raw commit message.
    ///
    /// Never fails: any input, including the empty string, yields a
    /// well-formed message. Line 0 is the summary. The trailer block is the
    /// maximal tail run of lines that each start a trailer (`key:` plus
    /// optional whitespace and a value) or continue the previous one (leading
    /// whitespace); the run must begin with a trailer start and be preceded
    /// by a blank line, otherwise the whole remainder is body. A `key: value`
    /// line embedded in prose is body.
    #[must_use]
    pub fn parse(message: &str) -> Self {
        let lines: Vec<&str> = message.lines().collect();
        let Some((&summary, rest)) = lines.split_first() else {
            return Self {
                summary: String::new(),
                body: String::new(),
                trailers: Vec::new(),
            };
        };

        // Maximal tail run of trailer-shaped lines.
        let mut start = rest.len();
        while start > 0 {
            let line = rest[start - 1];
            if is_blank(line) || !(is_trailer_start(line) || is_continuation(line)) {
                break;
            }
            start -= 1;
        }

        // The run only counts as a trailer block when it exists, opens with a
        // trailer start (a leading continuation has nothing to continue) and
        // a blank line separates it from what came before.
        let has_block = start < rest.len()
            && is_trailer_start(rest[start])
            && start > 0
            && is_blank(rest[start - 1]);

        let (mut body_lines, trailer_lines) = if has_block {
            (&rest[..start], &rest[start..])
        } else {
            (rest, &rest[rest.len()..])
        };

        while body_lines.first().is_some_and(|l| is_blank(l)) {
            body_lines = &body_lines[1..];
        }
        while body_lines.last().is_some_and(|l| is_blank(l)) {
            body_lines = &body_lines[..body_lines.len() - 1];
        }

        let mut trailers: Vec<Trailer> = Vec::new();
        for line in trailer_lines {
            if let Some(caps) = TRAILER_RE.captures(line) {
                trailers.push(Trailer::new(&caps["key"], caps["value"].trim_end()));
            } else if let Some(last) = trailers.last_mut() {
                if !last.value.is_empty() {
                    last.value.push(' ');
                }
                last.value.push_str(line.trim());
            }
        }

        Self {
            summary: summary.to_string(),
            body: body_lines.join("\n"),
            trailers,
        }
    }

    /// Reconstructs the message text from its parts.
    ///
    /// The result is the original message modulo a single normalizing blank
    /// line before the trailer block; re-parsing it yields the same
    /// structured result.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.summary.clone();
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str(&self.body);
        }
        if !self.trailers.is_empty() {
            out.push_str("\n\n");
            for (index, trailer) in self.trailers.iter().enumerate() {
                if index > 0 {
                    out.push('\n');
                }
                out.push_str(&trailer.key);
                out.push_str(": ");
                out.push_str(&trailer.value);
            }
        }
        out
    }

    /// Returns the values of all trailers with the given key, in appearance
    /// order.
    pub fn values_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.trailers
            .iter()
            .filter(move |t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// Returns the first whitespace-delimited token of the summary, if any.
    #[must_use]
    pub fn first_word(&self) -> Option<&str> {
        self.summary.split_whitespace().next()
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_trailer_start(line: &str) -> bool {
    TRAILER_RE.is_match(line)
}

fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !is_blank(line)
}
