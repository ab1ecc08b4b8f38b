use recap::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, sanitize_prompt,
};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}

#[test]
fn given_default_tracing_config_when_created_then_uses_plain_text_output() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.environment, "local");
    assert!(config.default_filter.contains("recap=debug"));
}

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_unchanged() {
    let prompt = "Summarize the following content clearly";
    assert_eq!(sanitize_prompt(prompt), prompt);
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);
    let result = sanitize_prompt(&prompt);
    assert!(result.contains("... (150 chars total)"));
    assert!(result.starts_with(&"a".repeat(100)));
}

#[test]
fn given_multibyte_prompt_when_truncating_then_cuts_on_char_boundary() {
    let prompt = "é".repeat(120);
    let result = sanitize_prompt(&prompt);
    assert!(result.starts_with(&"é".repeat(100)));
    assert!(result.contains("(120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer sk-abc123xyz");
    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("sk-abc123xyz"));
}

#[test]
fn given_url_with_key_parameter_when_sanitizing_then_redacts_only_the_value() {
    let result = sanitize_prompt("https://example.test/v1?key=abc123&v=dQw4w9WgXcQ");
    assert_eq!(result, "https://example.test/v1?key=[REDACTED]&v=dQw4w9WgXcQ");
}

#[test]
fn given_repeated_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("token=one and token=two");
    assert_eq!(result, "token=[REDACTED] and token=[REDACTED]");
}
