use clap::{command, Parser, ValueEnum};
use std::fs;
use std::io::Read;

use prompt_architect::{GenerationConfig, Language, Mode, PromptArchitect, PromptSet};

#[derive(Parser, Debug)]
#[command(
    name = "prompt-architect",
    about = "Generate Obsidian-ready LLM prompts from guideline text and bibliographies"
)]
struct Cli {
    /// Source text file, or "-" for stdin. In references mode this is the
    /// bibliography unless --refs is given.
    #[arg(value_name = "INPUT")]
    input: String,

    /// Generation mode
    #[arg(short, long, value_enum)]
    mode: CliMode,

    /// Bibliography file (section and references modes)
    #[arg(short, long)]
    refs: Option<String>,

    /// Chunk size ceiling in characters (translate mode)
    #[arg(long, default_value_t = 8000)]
    limit: usize,

    /// Project identifier prefix
    #[arg(long, default_value = "ESC-2025")]
    project_prefix: String,

    /// Expertise domain named in the prompt persona
    #[arg(long, default_value = "Cardiology")]
    domain: String,

    /// Language the model is asked to write in
    #[arg(long, value_enum, default_value_t = CliLanguage::Romanian)]
    language: CliLanguage,

    /// Default tag string for the YAML header
    #[arg(long)]
    tags: Option<String>,

    /// Terms the model is told to leave untranslated
    #[arg(long)]
    exclude_terms: Option<String>,

    /// ID format for guideline-section pages
    #[arg(long)]
    id_format: Option<String>,

    /// ID format for reference notes
    #[arg(long)]
    ref_format: Option<String>,

    /// Replace the active mode's template skeleton with this file's contents
    #[arg(long, value_name = "FILE")]
    template: Option<String>,

    /// Emit the full prompt set as JSON
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliMode {
    Section,
    Translate,
    References,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Section => Mode::Section,
            CliMode::Translate => Mode::Translate,
            CliMode::References => Mode::References,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliLanguage {
    Romanian,
    English,
    French,
}

impl From<CliLanguage> for Language {
    fn from(language: CliLanguage) -> Self {
        match language {
            CliLanguage::Romanian => Language::Romanian,
            CliLanguage::English => Language::English,
            CliLanguage::French => Language::French,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let mode = Mode::from(cli.mode);

    let input = read_source(&cli.input)?;
    let refs = match &cli.refs {
        Some(path) => read_source(path)?,
        None => String::new(),
    };

    // In references mode the positional input is the bibliography when no
    // separate --refs file is given.
    let (source_text, bibliography) = match mode {
        Mode::References if cli.refs.is_none() => (String::new(), input),
        _ => (input, refs),
    };

    let mut config = GenerationConfig::default()
        .with_project_prefix(cli.project_prefix)
        .with_domain(cli.domain)
        .with_language(cli.language.into())
        .with_chunk_limit(cli.limit);
    if let Some(tags) = cli.tags {
        config = config.with_default_tags(tags);
    }
    if let Some(terms) = cli.exclude_terms {
        config = config.with_exclude_terms(terms);
    }
    if let Some(format) = cli.id_format {
        config = config.with_id_format(format);
    }
    if let Some(format) = cli.ref_format {
        config = config.with_ref_format(format);
    }
    if let Some(path) = cli.template {
        let skeleton = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read template '{}': {}", path, e))?;
        config = match mode {
            Mode::Section => config.with_section_template(skeleton),
            Mode::Translate => config.with_translation_template(skeleton),
            Mode::References => config.with_study_template(skeleton),
        };
    }

    let architect = PromptArchitect::with_config(config);
    let set = match architect.generate(mode, &source_text, &bibliography) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for warning in &set.warnings {
        eprintln!("Warning: {warning}");
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&set)?
    } else {
        format_prompt_set(&set)
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .map_err(|e| format!("Failed to write to '{}': {}", path, e))?;
            eprintln!("Wrote {} prompt(s) to: {}", set.parts.len(), path);
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn read_source(path: &str) -> Result<String, std::io::Error> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

/// Render every part as a labeled, copyable block. Failed parts report their
/// error in place; the sequence is never truncated.
fn format_prompt_set(set: &PromptSet) -> String {
    let mut out = String::new();
    for part in &set.parts {
        out.push_str(&format!("==== {} | {} ====\n", part.label, part.preview));
        match (&part.prompt, &part.error) {
            (Some(prompt), _) => {
                out.push_str(prompt);
                if !prompt.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str(&format!("---- ~{} words ----\n\n", part.word_count));
            }
            (None, Some(error)) => {
                out.push_str(&format!("[failed] {error}\n\n"));
            }
            (None, None) => {}
        }
    }
    out
}
