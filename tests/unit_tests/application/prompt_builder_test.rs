use recap::application::services::{SUMMARY_INSTRUCTIONS, build_prompt};
use recap::domain::NormalizedText;

#[test]
fn given_text_when_building_prompt_then_instructions_precede_text() {
    let text = NormalizedText::new("Rust ownership rules").unwrap();

    let request = build_prompt(text);

    assert_eq!(
        request.prompt(),
        format!("{SUMMARY_INSTRUCTIONS}\n\nRust ownership rules")
    );
}

#[test]
fn given_instructions_when_inspecting_then_request_markdown_structure() {
    assert!(SUMMARY_INSTRUCTIONS.contains("markdown"));
    assert!(SUMMARY_INSTRUCTIONS.contains("**bold**"));
    assert!(SUMMARY_INSTRUCTIONS.contains("###"));
    assert!(SUMMARY_INSTRUCTIONS.trim_end().ends_with("Content:"));
}

#[test]
fn given_same_text_when_building_twice_then_prompts_are_identical() {
    let first = build_prompt(NormalizedText::new("same").unwrap());
    let second = build_prompt(NormalizedText::new("same").unwrap());

    assert_eq!(first, second);
    assert_eq!(first.instruction_template(), SUMMARY_INSTRUCTIONS);
}
