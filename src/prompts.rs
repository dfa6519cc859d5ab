//! Default prompt template skeletons.
//!
//! Every template is a plain string with named `{slot}` references, rendered
//! by [`crate::template::render`]. All three can be overridden per run via
//! [`crate::GenerationConfig`]; these defaults cover the common case of
//! preparing medical guideline material for Obsidian.

/// Default template for the guideline-section mode.
///
/// Produces one prompt asking the model to turn a pasted guideline section
/// into a fully formatted Obsidian page, with bibliography links resolved
/// against the pasted reference list.
///
/// Slots: `{domain}`, `{source_name}`, `{id_format}`, `{project_prefix}`,
/// `{section}`, `{default_tags}`, `{language}`, `{exclude_terms}`,
/// `{ref_format}`, `{input_text}`, `{input_refs}`
pub const DEFAULT_SECTION_TEMPLATE: &str = r#"Act as an expert in {domain} and an advanced Obsidian user.
Analyze the following text extracted from {source_name} and create an Obsidian page formatted as follows:

### 1. YAML Header
Include:
* id: {id_format} (e.g. {project_prefix}-{section}-Title)
* type: guideline-section
* project: {project_prefix}
* domain: {domain}
* tags: {default_tags}
* linked_paragraphs: (leave empty)

### 2. Structure
* Callout: > [!abstract] Overview (short summary)
* Translation: write in {language}. Keep established technical terms untranslated ({exclude_terms}).
* Style: use subheadings (H2, H3), bold, and emoji to structure the information.

### 3. Linking Logic
* Replace numeric references (e.g. [27]) with links [[{ref_format}-AUTHOR-YEAR]].
* Use the bibliography at the end to identify the author and year.

### 4. Input
SECTION TEXT:
{input_text}

BIBLIOGRAPHY:
{input_refs}
"#;

/// Default template for the study/reference-note mode.
///
/// Rendered once per bibliographic entry isolated by
/// [`crate::segment::segment`].
///
/// Slots: `{domain}`, `{ref_format}`, `{project_prefix}`, `{default_tags}`,
/// `{language}`, `{input_refs}`
pub const DEFAULT_STUDY_TEMPLATE: &str = r#"Act as an expert researcher in {domain}.
Create an academic reference note for the bibliography entry below.

### 1. Header & ID
* H1: {ref_format}-AUTHOR-YEAR
* YAML: id, type: reference, project: {project_prefix}, domain: {domain}, tags: {default_tags}, doi_url.

### 2. Content (structure)
Look up the details or extract them from the entry:
* Context/Population: who or what was studied?
* Methods: methodology used.
* Results: key data.
* Conclusion: main takeaway.
* External link: DOI/PubMed.

### 3. Language
Write in {language}.

### 4. Input
REFERENCE:
{input_refs}
"#;

/// Default template for the long-document translation mode.
///
/// Rendered once per chunk produced by [`crate::chunk::chunk`] over the
/// annotated document. The visual placeholder rule refers to the blocks
/// inserted by [`crate::annotate::annotate`].
///
/// Slots: `{domain}`, `{language}`, `{exclude_terms}`, `{part_label}`,
/// `{input_text}`
pub const DEFAULT_TRANSLATION_TEMPLATE: &str = r#"Act as a medical translator specialized in {domain}.
Translate the guideline fragment below into {language} and reformat it as clean markdown.

Rules:
* Keep established technical terms untranslated ({exclude_terms}).
* Preserve headings, lists and tables; use H2/H3 subheadings to structure the text.
* Keep every VISUAL PLACEHOLDER block exactly where it appears. Do not move, merge or delete them.
* Do not summarize. Translate the full fragment; it is {part_label} of a longer document.

FRAGMENT:
{input_text}
"#;
