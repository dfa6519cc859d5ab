//! Prompt template rendering.
//!
//! Templates carry named `{slot}` references. Rendering is a two-pass
//! process: every slot referenced by the template is checked against the
//! bound variables first, producing one aggregated error for all unbound
//! slots, and only then substituted. Bound values are inserted verbatim and
//! never re-scanned, so curly braces inside pasted user text cannot inject
//! further substitution.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::error::ArchitectError;
use crate::model::PromptVariables;

/// A substitution slot: an ASCII identifier in curly braces.
static SLOT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// List every slot name referenced by `template`, in order of first use.
pub fn referenced_slots(template: &str) -> Vec<String> {
    let mut slots: Vec<String> = Vec::new();
    for cap in SLOT_PATTERN.captures_iter(template) {
        let name = &cap[1];
        if !slots.iter().any(|s| s == name) {
            slots.push(name.to_string());
        }
    }
    slots
}

/// Render `template` by substituting every `{slot}` with its bound value.
///
/// Fails with [`ArchitectError::MissingVariables`] naming every unbound slot
/// before any substitution happens. Text that does not match the slot syntax
/// passes through untouched.
pub fn render(template: &str, variables: &PromptVariables) -> Result<String, ArchitectError> {
    let missing: Vec<String> = referenced_slots(template)
        .into_iter()
        .filter(|slot| !variables.contains_key(slot))
        .collect();
    if !missing.is_empty() {
        return Err(ArchitectError::MissingVariables { keys: missing });
    }

    let rendered = SLOT_PATTERN.replace_all(template, |caps: &Captures| {
        variables[&caps[1]].clone()
    });
    Ok(rendered.into_owned())
}
