//! String primitives used the way template authors combine them.

use anyhow::Result;
use serde_json::json;
use tmpl_helpers::test_utils::render;

#[test]
fn test_split_then_join() -> Result<()> {
    let out = render(
        "{% set parts = Split(s=path, sep='/') %}{{ Join(elems=parts, sep=' > ') }}",
        json!({"path": "docs/guide/intro"}),
    )?;
    assert_eq!(out, "docs > guide > intro");
    Ok(())
}

#[test]
fn test_split_feeds_last() -> Result<()> {
    let out = render("{{ path | Split(sep='/') | Last }}", json!({"path": "a/b/file.md"}))?;
    assert_eq!(out, "file.md");
    Ok(())
}

#[test]
fn test_split_n_keeps_remainder() -> Result<()> {
    let out = render(
        "{% for part in SplitN(s=kv, sep='=', n=2) %}[{{ part }}]{% endfor %}",
        json!({"kv": "key=a=b"}),
    )?;
    assert_eq!(out, "[key][a=b]");
    Ok(())
}

#[test]
fn test_trim_family() -> Result<()> {
    let out = render(
        "[{{ s | TrimSpace }}][{{ t | Trim(cutset='xy') }}][{{ f | TrimSuffix(suffix='.md') | TrimPrefix(prefix='docs/') }}]",
        json!({"s": "  pad  ", "t": "xxhiyy", "f": "docs/readme.md"}),
    )?;
    assert_eq!(out, "[pad][hi][readme]");
    Ok(())
}

#[test]
fn test_replace_all_with_negative_count() -> Result<()> {
    let out = render(
        "{{ Replace(s=s, old='o', new='0', n=all) }}|{{ Replace(s=s, old='o', new='0', n=1) }}",
        json!({"s": "foo boo", "all": -1}),
    )?;
    assert_eq!(out, "f00 b00|f0o boo");
    Ok(())
}

#[test]
fn test_predicates_in_conditions() -> Result<()> {
    let template = "{% set prefixed = HasPrefix(s=f, prefix='test_') %}{% set db = Contains(s=f, substr='db') %}{% if prefixed and db %}db-test{% else %}other{% endif %}";
    assert_eq!(render(template, json!({"f": "test_db_pool"}))?, "db-test");
    assert_eq!(render(template, json!({"f": "test_cache"}))?, "other");
    Ok(())
}

#[test]
fn test_case_helpers() -> Result<()> {
    let out = render(
        "{{ s | Title }}|{{ s | ToTitle }}|{{ s | ToUpper | ToLower }}|{{ EqualFold(s='Go', t='GO') }}",
        json!({"s": "hello wide world"}),
    )?;
    assert_eq!(out, "Hello Wide World|HELLO WIDE WORLD|hello wide world|true");
    Ok(())
}

#[test]
fn test_index_helpers_return_character_positions() -> Result<()> {
    let out = render(
        "{{ Index(s=s, substr='l') }} {{ LastIndex(s=s, substr='l') }} {{ Index(s=s, substr='z') }} {{ Count(s=s, substr='l') }}",
        json!({"s": "héllo"}),
    )?;
    assert_eq!(out, "2 3 -1 2");
    Ok(())
}

#[test]
fn test_compare_and_repeat() -> Result<()> {
    let out = render(
        "{{ Compare(a='a', b='b') }} {{ Compare(a='b', b='b') }} {{ '-' | Repeat(count=3) }}",
        json!({}),
    )?;
    assert_eq!(out, "-1 0 ---");
    Ok(())
}

#[test]
fn test_negative_repeat_count_faults() {
    assert!(render("{{ Repeat(s='x', count=n) }}", json!({"n": -1})).is_err());
}

#[test]
fn test_oversized_repeat_aborts_render_without_panicking() {
    let err = render("{{ Repeat(s='ab', count=n) }}", json!({"n": 1i64 << 62})).unwrap_err();
    assert_eq!(err.helper(), Some("Repeat"));
    assert!(err.to_string().contains("overflow"), "{err}");
}
