//! Turn pasted guideline text and bibliographies into pre-formatted LLM
//! prompts, ready to copy into an external chat interface.
//!
//! The pipeline is pure, synchronous text processing: annotate figure/table
//! citations, split the document into paragraph-aligned chunks or the
//! bibliography into numbered entries, then render one prompt per part from
//! a template skeleton. Nothing is persisted and no network calls are made;
//! the output is meant for manual copy-paste.

pub mod annotate;
pub mod chunk;
pub mod error;
pub mod model;
pub mod prompts;
pub mod segment;
pub mod template;

use log::warn;

pub use annotate::annotate;
pub use chunk::chunk;
pub use error::ArchitectError;
pub use model::{
    GenerationConfig, Language, Mode, PromptPart, PromptSet, PromptVariables,
};
pub use segment::segment;
pub use template::{referenced_slots, render};

/// Main interface for generating prompts.
///
/// Captures an immutable [`GenerationConfig`] and runs the full pipeline for
/// a selected [`Mode`] on each explicit [`generate`](Self::generate) call.
/// Runs are independent; the architect holds no state between them.
pub struct PromptArchitect {
    config: GenerationConfig,
}

impl PromptArchitect {
    /// Create an architect with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GenerationConfig::default())
    }

    pub fn with_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run the pipeline for `mode` over the inputs captured at trigger time.
    ///
    /// `source_text` is the pasted document (section and translate modes),
    /// `bibliography` the pasted reference list (section and references
    /// modes). Fails up front on an empty required input or an invalid
    /// configuration; a template error in one part is recorded on that part
    /// and does not abort the others.
    pub fn generate(
        &self,
        mode: Mode,
        source_text: &str,
        bibliography: &str,
    ) -> Result<PromptSet, ArchitectError> {
        self.config.validate()?;
        match mode {
            Mode::Section => self.generate_section(source_text, bibliography),
            Mode::Translate => self.generate_translation(source_text),
            Mode::References => self.generate_references(bibliography),
        }
    }

    fn generate_section(
        &self,
        source_text: &str,
        bibliography: &str,
    ) -> Result<PromptSet, ArchitectError> {
        if source_text.trim().is_empty() {
            return Err(ArchitectError::MissingInput("section text"));
        }

        let mut variables = self.base_variables();
        variables.insert("input_text".to_string(), source_text.to_string());
        variables.insert("input_refs".to_string(), bibliography.to_string());

        let outcome = template::render(&self.config.section_template, &variables);
        let mut set = PromptSet::default();
        set.parts
            .push(PromptPart::from_outcome(1, 1, source_text, outcome));
        Ok(set)
    }

    fn generate_translation(&self, source_text: &str) -> Result<PromptSet, ArchitectError> {
        if source_text.trim().is_empty() {
            return Err(ArchitectError::MissingInput("source text"));
        }

        let annotated = annotate::annotate(source_text);
        let chunks = chunk::chunk(&annotated, self.config.chunk_limit);

        let mut set = PromptSet::default();
        let total = chunks.len();
        for (i, piece) in chunks.iter().enumerate() {
            let index = i + 1;
            if piece.chars().count() > self.config.chunk_limit {
                warn!(
                    "part {index} holds a single paragraph longer than the limit ({} > {})",
                    piece.chars().count(),
                    self.config.chunk_limit
                );
                set.push_warning(format!(
                    "part {index} exceeds the size limit: one paragraph is longer than {} characters",
                    self.config.chunk_limit
                ));
            }

            let mut variables = self.base_variables();
            variables.insert("input_text".to_string(), piece.clone());
            variables.insert("part_label".to_string(), format!("part {index} of {total}"));

            let outcome = template::render(&self.config.translation_template, &variables);
            set.parts
                .push(PromptPart::from_outcome(index, total, piece, outcome));
        }
        Ok(set)
    }

    fn generate_references(&self, bibliography: &str) -> Result<PromptSet, ArchitectError> {
        if bibliography.trim().is_empty() {
            return Err(ArchitectError::MissingInput("bibliography"));
        }

        let mut set = PromptSet::default();
        let mut entries = segment::segment(bibliography);
        if entries.is_empty() {
            warn!("no numbered reference entries detected; using the whole input as one entry");
            set.push_warning(
                "no numbered reference entries detected; the whole input was treated as a single entry",
            );
            entries.push(bibliography.to_string());
        }

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let index = i + 1;
            let mut variables = self.base_variables();
            variables.insert("input_refs".to_string(), entry.clone());

            let outcome = template::render(&self.config.study_template, &variables);
            set.parts
                .push(PromptPart::from_outcome(index, total, entry, outcome));
        }
        Ok(set)
    }

    /// Bindings shared by every mode, derived from the captured config.
    fn base_variables(&self) -> PromptVariables {
        let config = &self.config;
        let mut variables = PromptVariables::new();
        variables.insert("domain".to_string(), config.domain.clone());
        variables.insert(
            "source_name".to_string(),
            format!("the {} guideline", config.project_prefix),
        );
        variables.insert("id_format".to_string(), config.id_format.clone());
        variables.insert("project_prefix".to_string(), config.project_prefix.clone());
        variables.insert("section".to_string(), "SECTION".to_string());
        variables.insert("default_tags".to_string(), config.default_tags.clone());
        variables.insert("language".to_string(), config.language.to_string());
        variables.insert("exclude_terms".to_string(), config.exclude_terms.clone());
        variables.insert("ref_format".to_string(), config.ref_format.clone());
        variables
    }
}

impl Default for PromptArchitect {
    fn default() -> Self {
        Self::new()
    }
}
