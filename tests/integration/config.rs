//! Helper registration controlled by a `[helpers]` TOML file.

use anyhow::Result;
use serde_json::json;
use tempfile::TempDir;
use tmpl_helpers::config::HelperConfig;
use tmpl_helpers::templating::{TemplateError, TemplateRenderer};
use tmpl_helpers::test_utils::{context_from, render_with};

fn write_config(dir: &TempDir, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join("helpers.toml");
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_prefix_and_disabled_from_file() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_config(
        &temp,
        r#"
[helpers]
prefix = "h_"
disabled = ["TimeNow"]
"#,
    )?;
    let config = HelperConfig::load(&path)?;

    let out = render_with(&config, "{{ h_Left(s=name, n=3) }}{{ name | h_Right(n=2) }}", json!({"name": "abcdef"}))?;
    assert_eq!(out, "abcef");

    assert!(render_with(&config, "{{ h_TimeNow() }}", json!({})).is_err());
    assert!(render_with(&config, "{{ Left(s='a', n=1) }}", json!({})).is_err());
    Ok(())
}

#[test]
fn test_suggestions_carry_prefix() -> Result<()> {
    let config = HelperConfig::from_toml_str("[helpers]\nprefix = \"h_\"\n")?;
    let err = render_with(&config, "{{ h_ToUper(s='a') }}", json!({})).unwrap_err();
    match err {
        TemplateError::UnknownHelper {
            suggestions,
            ..
        } => assert_eq!(suggestions.first().map(String::as_str), Some("h_ToUpper")),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn test_filters_disabled() -> Result<()> {
    let config = HelperConfig::from_toml_str("[helpers]\nfilters = false\n")?;
    assert!(render_with(&config, "{{ name | ToUpper }}", json!({"name": "a"})).is_err());
    assert_eq!(render_with(&config, "{{ ToUpper(s=name) }}", json!({"name": "a"}))?, "A");
    Ok(())
}

#[test]
fn test_file_without_helpers_table_uses_defaults() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "[other]\nkey = 1\n")?;
    assert_eq!(HelperConfig::load(&path)?, HelperConfig::default());
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_with_context() -> Result<()> {
    let temp = TempDir::new()?;
    let path = write_config(&temp, "[helpers]\nprefix = 3\n")?;
    let err = HelperConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("helpers.toml"));

    let config = HelperConfig::from_toml_str("[helpers]\ndisabled = [\"Lefft\"]\n")?;
    let err = TemplateRenderer::new(&config).err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("Unknown helper 'Lefft' (did you mean: Left?)"));
    Ok(())
}

#[test]
fn test_renderer_reuse() -> Result<()> {
    let mut renderer = TemplateRenderer::new(&HelperConfig::default())?;
    for name in ["ab", "cd", "ef"] {
        let out = renderer.render_template("{{ n | Repeat(count=2) }}", &context_from(json!({"n": name})))?;
        assert_eq!(out, name.repeat(2));
    }
    Ok(())
}
