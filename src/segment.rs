//! Bibliography segmentation.
//!
//! Splits a pasted reference list into individual numbered entries using a
//! line-start heuristic. Continuation lines (Scholar/DOI annotations, wrapped
//! titles) attach to the entry above them.

use regex::Regex;
use std::sync::LazyLock;

/// A reference entry starts with one or more digits followed by a period,
/// a tab or a space, at the very beginning of the line.
static ENTRY_START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.\s]").unwrap());

/// Split `text` into numbered reference entries, each rejoined with `\n`.
///
/// A start line closes any open entry and opens a new one; every other line
/// is appended to the open entry. Lines before the first start line never
/// open an entry, so leading blank or free-form lines cannot produce a
/// spurious one. Input with no start line at all yields zero entries; the
/// caller is expected to fall back to treating the whole input as a single
/// entry (see [`crate::PromptArchitect::generate`]).
///
/// The heuristic is deliberately lexical: a line starting with "20. " is an
/// entry start whether it is a reference number or a date.
pub fn segment(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in text.lines() {
        if ENTRY_START_PATTERN.is_match(line) {
            if let Some(entry) = current.take() {
                entries.push(entry.join("\n"));
            }
            current = Some(vec![line]);
        } else if let Some(entry) = current.as_mut() {
            entry.push(line);
        }
    }
    if let Some(entry) = current {
        entries.push(entry.join("\n"));
    }
    entries
}
