use recap::application::services::{PipelineError, normalize};
use recap::domain::ExtractedUnit;

fn units(parts: &[&str]) -> Vec<ExtractedUnit> {
    parts.iter().map(|p| ExtractedUnit::from(*p)).collect()
}

#[test]
fn given_units_when_normalizing_then_joins_with_newlines_and_trims() {
    let text = normalize(&units(&["  first", "second", "third  "])).unwrap();

    assert_eq!(text.as_str(), "first\nsecond\nthird");
}

#[test]
fn given_empty_interior_units_when_normalizing_then_keeps_their_separators() {
    let text = normalize(&units(&["page one", "", "page three"])).unwrap();

    assert_eq!(text.as_str(), "page one\n\npage three");
}

#[test]
fn given_only_whitespace_when_normalizing_then_empty_content() {
    let result = normalize(&units(&["", "  ", "\t"]));

    assert!(matches!(result, Err(PipelineError::EmptyContent)));
}

#[test]
fn given_no_units_when_normalizing_then_empty_content() {
    assert!(matches!(normalize(&[]), Err(PipelineError::EmptyContent)));
}

#[test]
fn given_single_trimmed_line_when_normalizing_then_returns_it_unchanged() {
    let text = normalize(&units(&["already clean"])).unwrap();

    assert_eq!(text.as_str(), "already clean");
}

#[test]
fn given_single_empty_unit_when_normalizing_then_empty_content() {
    assert!(matches!(
        normalize(&units(&[""])),
        Err(PipelineError::EmptyContent)
    ));
}
