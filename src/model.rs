//! Core types shared across the generation pipeline.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::ArchitectError;
use crate::prompts;

/// Named placeholder bindings for template rendering.
pub type PromptVariables = HashMap<String, String>;

/// Output language for generated prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Romanian,
    English,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Romanian => "Romanian",
            Language::English => "English",
            Language::French => "French",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "romanian" | "ro" => Ok(Language::Romanian),
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// Generation mode selecting which pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One prompt turning a guideline section into an Obsidian page.
    Section,
    /// Annotate figures, chunk the document, one translation prompt per chunk.
    Translate,
    /// One study-note prompt per bibliographic entry.
    References,
}

/// Immutable per-run configuration, captured once when generation is
/// triggered and passed by reference into each pipeline stage.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Project identifier prefix, e.g. "ESC-2025".
    pub project_prefix: String,
    /// Expertise domain named in the prompt persona.
    pub domain: String,
    /// Language the model is asked to write in.
    pub language: Language,
    /// ID format for guideline-section pages.
    pub id_format: String,
    /// ID format for reference notes.
    pub ref_format: String,
    /// Terms the model is told to leave untranslated.
    pub exclude_terms: String,
    /// Default tag string for the YAML header.
    pub default_tags: String,
    /// Chunk size ceiling in characters (translate mode).
    pub chunk_limit: usize,
    /// Template skeleton for section mode.
    pub section_template: String,
    /// Template skeleton for references mode.
    pub study_template: String,
    /// Template skeleton for translate mode.
    pub translation_template: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let prefix = "ESC-2025";
        Self {
            project_prefix: prefix.to_string(),
            domain: "Cardiology".to_string(),
            language: Language::default(),
            id_format: format!("{prefix}-X.X"),
            ref_format: format!("{prefix}-REF"),
            exclude_terms: "Latin, eponyms, drug names".to_string(),
            default_tags: "#guideline #medicine".to_string(),
            chunk_limit: 8000,
            section_template: prompts::DEFAULT_SECTION_TEMPLATE.to_string(),
            study_template: prompts::DEFAULT_STUDY_TEMPLATE.to_string(),
            translation_template: prompts::DEFAULT_TRANSLATION_TEMPLATE.to_string(),
        }
    }
}

impl GenerationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the project prefix. Also refreshes the derived ID formats; call
    /// [`with_id_format`](Self::with_id_format) or
    /// [`with_ref_format`](Self::with_ref_format) afterwards to override.
    pub fn with_project_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.project_prefix = prefix.into();
        self.id_format = format!("{}-X.X", self.project_prefix);
        self.ref_format = format!("{}-REF", self.project_prefix);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_id_format(mut self, format: impl Into<String>) -> Self {
        self.id_format = format.into();
        self
    }

    pub fn with_ref_format(mut self, format: impl Into<String>) -> Self {
        self.ref_format = format.into();
        self
    }

    pub fn with_exclude_terms(mut self, terms: impl Into<String>) -> Self {
        self.exclude_terms = terms.into();
        self
    }

    pub fn with_default_tags(mut self, tags: impl Into<String>) -> Self {
        self.default_tags = tags.into();
        self
    }

    pub fn with_chunk_limit(mut self, limit: usize) -> Self {
        self.chunk_limit = limit;
        self
    }

    pub fn with_section_template(mut self, template: impl Into<String>) -> Self {
        self.section_template = template.into();
        self
    }

    pub fn with_study_template(mut self, template: impl Into<String>) -> Self {
        self.study_template = template.into();
        self
    }

    pub fn with_translation_template(mut self, template: impl Into<String>) -> Self {
        self.translation_template = template.into();
        self
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ArchitectError> {
        if self.chunk_limit == 0 {
            return Err(ArchitectError::InvalidLimit(self.chunk_limit));
        }
        Ok(())
    }
}

/// One rendered prompt (or its failure) within a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct PromptPart {
    /// 1-based position in the run.
    pub index: usize,
    /// Number of parts in the run.
    pub total: usize,
    /// Display label, e.g. "Part 2 of 5".
    pub label: String,
    /// Short excerpt of the source text behind this part.
    pub preview: String,
    /// Approximate word count of the rendered prompt.
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const PREVIEW_CHARS: usize = 80;

impl PromptPart {
    /// Build a part from one render outcome. The preview is taken from the
    /// part's source text, not from the rendered prompt.
    pub fn from_outcome(
        index: usize,
        total: usize,
        source: &str,
        outcome: Result<String, ArchitectError>,
    ) -> Self {
        let preview: String = source
            .chars()
            .take(PREVIEW_CHARS)
            .collect::<String>()
            .replace('\n', " ");
        let label = format!("Part {index} of {total}");
        match outcome {
            Ok(prompt) => Self {
                index,
                total,
                label,
                preview,
                word_count: prompt.split_whitespace().count(),
                prompt: Some(prompt),
                error: None,
            },
            Err(err) => Self {
                index,
                total,
                label,
                preview,
                word_count: 0,
                prompt: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.prompt.is_some()
    }
}

/// Ordered output of one generation action.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PromptSet {
    pub parts: Vec<PromptPart>,
    /// Non-fatal notes surfaced to the user, e.g. the segmentation fallback.
    pub warnings: Vec<String>,
}

impl PromptSet {
    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.project_prefix, "ESC-2025");
        assert_eq!(config.domain, "Cardiology");
        assert_eq!(config.language, Language::Romanian);
        assert_eq!(config.id_format, "ESC-2025-X.X");
        assert_eq!(config.ref_format, "ESC-2025-REF");
        assert_eq!(config.chunk_limit, 8000);
    }

    #[test]
    fn test_prefix_change_refreshes_derived_formats() {
        let config = GenerationConfig::default().with_project_prefix("AHA-2026");
        assert_eq!(config.id_format, "AHA-2026-X.X");
        assert_eq!(config.ref_format, "AHA-2026-REF");
    }

    #[test]
    fn test_explicit_format_overrides_survive() {
        let config = GenerationConfig::default()
            .with_project_prefix("AHA-2026")
            .with_ref_format("AHA-REF");
        assert_eq!(config.ref_format, "AHA-REF");
    }

    #[test]
    fn test_zero_chunk_limit_is_rejected() {
        let config = GenerationConfig::default().with_chunk_limit(0);
        assert!(matches!(
            config.validate(),
            Err(ArchitectError::InvalidLimit(0))
        ));
    }

    #[test]
    fn test_language_parses_case_insensitively() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("fr".parse::<Language>().unwrap(), Language::French);
        assert!("klingon".parse::<Language>().is_err());
    }

    #[test]
    fn test_part_preview_is_single_line_and_bounded() {
        let source = "first line\nsecond line that keeps going well past the preview budget so it gets cut";
        let part = PromptPart::from_outcome(1, 1, source, Ok("a prompt".to_string()));
        assert!(!part.preview.contains('\n'));
        assert!(part.preview.chars().count() <= 80);
    }
}
