//! Hard faults abort rendering; the two soft failures render a default.

use anyhow::Result;
use serde_json::json;
use tmpl_helpers::templating::{CallKind, TemplateError};
use tmpl_helpers::test_utils::render;

#[test]
fn test_invalid_pattern_renders_false() -> Result<()> {
    let out = render(r#"{{ Matches(s="abc", pattern="[") }}"#, json!({}))?;
    assert_eq!(out, "false");
    Ok(())
}

#[test]
fn test_last_on_empty_list_aborts_rendering() {
    let err = render("before {{ items | Last }} after", json!({"items": []})).unwrap_err();
    match &err {
        TemplateError::HelperFailed {
            helper,
            call,
            message,
            ..
        } => {
            assert_eq!(helper, "Last");
            assert_eq!(*call, CallKind::Filter);
            assert_eq!(message, "Last: index out of range [-1] with length 0");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.format_with_context().contains("Expected: Last(list)"));
}

#[test]
fn test_wrong_argument_type_is_not_coerced() {
    let err = render("{{ Left(s=n, n=2) }}", json!({"n": 12345})).unwrap_err();
    assert!(err.to_string().contains("must be a string, got an integer"), "{err}");

    let err = render("{{ Left(s='abc', n=1.5) }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("must be an integer, got a float"), "{err}");
}

#[test]
fn test_type_fault_in_soft_helper_still_aborts() {
    // Only a malformed pattern is swallowed, not a non-string argument.
    let err = render("{{ Matches(s=1, pattern='a') }}", json!({})).unwrap_err();
    assert_eq!(err.helper(), Some("Matches"));
}

#[test]
fn test_missing_and_unexpected_keywords() {
    let err = render("{{ Left(s='abc') }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("missing required argument 'n'"), "{err}");

    let err = render("{{ Left(s='abc', n=1, count=2) }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("count"), "{err}");
}

#[test]
fn test_list_with_non_string_elements() {
    let err = render("{{ items | Join(sep=',') }}", json!({"items": ["a", 1]})).unwrap_err();
    assert!(err.to_string().contains("non-string"), "{err}");
}

#[test]
fn test_unknown_helper_suggests_close_names() {
    let err = render("{{ name | TrimSpce }}", json!({"name": " a "})).unwrap_err();
    assert_eq!(err.helper(), Some("TrimSpce"));
    match &err {
        TemplateError::UnknownHelper {
            call,
            suggestions,
            ..
        } => {
            assert_eq!(*call, CallKind::Filter);
            assert_eq!(suggestions.first().map(String::as_str), Some("TrimSpace"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_syntax_error_hides_internal_template_name() {
    let err = render("{{ Left(s='a' }}", json!({})).unwrap_err();
    assert!(matches!(err, TemplateError::SyntaxError { .. }));
    assert!(!err.to_string().contains("__tera_one_off"));
}
