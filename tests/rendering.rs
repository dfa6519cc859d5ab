//! Tests pinning the default template skeletons to the pipeline bindings.
//!
//! A default template referencing a slot the pipeline never binds would fail
//! every generation at runtime, so the contract is checked here.

use prompt_architect::{prompts, referenced_slots, Mode, PromptArchitect};

fn assert_fully_rendered(prompt: &str, template: &str) {
    for slot in referenced_slots(template) {
        assert!(
            !prompt.contains(&format!("{{{slot}}}")),
            "slot {{{slot}}} survived rendering"
        );
    }
}

#[test]
fn test_section_template_slots_are_all_bound_by_the_pipeline() {
    let architect = PromptArchitect::new();
    let set = architect
        .generate(Mode::Section, "section text\n", "1. Ref.")
        .unwrap();
    let prompt = set.parts[0].prompt.as_ref().expect("default template must render");
    assert_fully_rendered(prompt, prompts::DEFAULT_SECTION_TEMPLATE);
}

#[test]
fn test_study_template_slots_are_all_bound_by_the_pipeline() {
    let architect = PromptArchitect::new();
    let set = architect
        .generate(Mode::References, "", "1. Smith J. 2024.")
        .unwrap();
    let prompt = set.parts[0].prompt.as_ref().expect("default template must render");
    assert_fully_rendered(prompt, prompts::DEFAULT_STUDY_TEMPLATE);
}

#[test]
fn test_translation_template_slots_are_all_bound_by_the_pipeline() {
    let architect = PromptArchitect::new();
    let set = architect
        .generate(Mode::Translate, "a paragraph to translate\n", "")
        .unwrap();
    let prompt = set.parts[0].prompt.as_ref().expect("default template must render");
    assert_fully_rendered(prompt, prompts::DEFAULT_TRANSLATION_TEMPLATE);
}

#[test]
fn test_default_templates_reference_their_documented_slots() {
    let section = referenced_slots(prompts::DEFAULT_SECTION_TEMPLATE);
    for slot in ["domain", "source_name", "id_format", "project_prefix", "section", "default_tags", "language", "exclude_terms", "ref_format", "input_text", "input_refs"] {
        assert!(section.iter().any(|s| s == slot), "section template lost {{{slot}}}");
    }

    let study = referenced_slots(prompts::DEFAULT_STUDY_TEMPLATE);
    for slot in ["domain", "ref_format", "project_prefix", "default_tags", "language", "input_refs"] {
        assert!(study.iter().any(|s| s == slot), "study template lost {{{slot}}}");
    }

    let translation = referenced_slots(prompts::DEFAULT_TRANSLATION_TEMPLATE);
    for slot in ["domain", "language", "exclude_terms", "part_label", "input_text"] {
        assert!(translation.iter().any(|s| s == slot), "translation template lost {{{slot}}}");
    }
}
