//! Helpers called from templates as functions and filters.

use anyhow::Result;
use serde_json::json;
use tmpl_helpers::test_utils::render;

#[test]
fn test_left_right_mid_as_functions() -> Result<()> {
    let out = render(
        "{{ Left(s=text, n=5) }}|{{ Right(s=text, n=100) }}|{{ Mid(s=text, left=6) }}|{{ Mid(s=text, left=0, right=5) }}",
        json!({"text": "hello world"}),
    )?;
    assert_eq!(out, "hello|hello world|world|hello");
    Ok(())
}

#[test]
fn test_left_right_mid_as_filters() -> Result<()> {
    let out = render(
        "{{ text | Left(n=5) }}|{{ text | Right(n=5) }}|{{ text | Mid(left=3, right=8) }}",
        json!({"text": "hello world"}),
    )?;
    assert_eq!(out, "hello|world|lo wo");
    Ok(())
}

#[test]
fn test_counts_characters_not_bytes() -> Result<()> {
    let out = render("{{ word | Left(n=2) }}-{{ word | Right(n=3) }}", json!({"word": "héllo"}))?;
    assert_eq!(out, "hé-llo");
    Ok(())
}

#[test]
fn test_matches() -> Result<()> {
    let out = render(
        r#"{{ Matches(s=tag, pattern="[0-9]+") }} {{ tag | Matches(pattern="^x") }}"#,
        json!({"tag": "abc123"}),
    )?;
    assert_eq!(out, "true false");
    Ok(())
}

#[test]
fn test_matches_in_condition() -> Result<()> {
    let template = r#"{% set release = Matches(s=tag, pattern="^v[0-9]+") %}{% if release %}release{% else %}dev{% endif %}"#;
    assert_eq!(render(template, json!({"tag": "v12"}))?, "release");
    assert_eq!(render(template, json!({"tag": "main"}))?, "dev");
    Ok(())
}

#[test]
fn test_last() -> Result<()> {
    let out = render(
        "{{ Last(list=items) }} {{ items | Last }}",
        json!({"items": ["a", "b", "c"]}),
    )?;
    assert_eq!(out, "c c");
    Ok(())
}

#[test]
fn test_json_function_and_filter() -> Result<()> {
    let out = render(r#"{{ JSON(values=["x", 1, true]) }}"#, json!({}))?;
    assert_eq!(out, r#"["x",1,true]"#);

    let out = render("{{ user | JSON }}", json!({"user": {"name": "ana", "id": 7}}))?;
    let decoded: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(decoded, json!([{"name": "ana", "id": 7}]));
    Ok(())
}

#[test]
fn test_json_without_values() -> Result<()> {
    assert_eq!(render("{{ JSON() }}", json!({}))?, "[]");
    Ok(())
}

#[test]
fn test_time_now_is_rfc3339() -> Result<()> {
    let out = render("{{ TimeNow() }}", json!({}))?;
    assert!(chrono::DateTime::parse_from_rfc3339(&out).is_ok(), "not RFC 3339: {out}");
    Ok(())
}

#[test]
fn test_helpers_compose_with_builtin_filters() -> Result<()> {
    let out = render(
        "{% for item in items %}{{ item | Left(n=1) | ToUpper }}{% endfor %}/{{ items | length }}",
        json!({"items": ["alpha", "beta", "gamma"]}),
    )?;
    assert_eq!(out, "ABG/3");
    Ok(())
}
