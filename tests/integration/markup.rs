//! `JSON` output embedded in HTML templates with autoescaping on.

use anyhow::Result;
use serde_json::json;
use tera::{Context, Tera};
use tmpl_helpers::config::HelperConfig;
use tmpl_helpers::helpers::registry;
use tmpl_helpers::templating::register_helpers;

fn html_tera(template: &str) -> Result<Tera> {
    let mut tera = Tera::default();
    register_helpers(&mut tera, registry(), &HelperConfig::default())?;
    tera.add_raw_template("page.html", template)?;
    Ok(tera)
}

#[test]
fn test_json_is_not_html_escaped_again() -> Result<()> {
    let tera = html_tera("<script>var data = {{ JSON(values=[user]) }};</script>")?;
    let context = Context::from_value(json!({"user": {"name": "</script><b>"}}))?;

    let out = tera.render("page.html", &context)?;
    assert_eq!(
        out,
        r#"<script>var data = [{"name":"\u003c/script\u003e\u003cb\u003e"}];</script>"#
    );
    Ok(())
}

#[test]
fn test_json_filter_is_safe() -> Result<()> {
    let tera = html_tera("{{ items | JSON }}")?;
    let context = Context::from_value(json!({"items": ["a&b"]}))?;
    assert_eq!(tera.render("page.html", &context)?, r#"[["a\u0026b"]]"#);
    Ok(())
}

#[test]
fn test_other_helpers_are_escaped() -> Result<()> {
    let tera = html_tera("{{ ToUpper(s=tag) }}")?;
    let context = Context::from_value(json!({"tag": "<b>"}))?;
    assert_eq!(tera.render("page.html", &context)?, "&lt;B&gt;");
    Ok(())
}

#[test]
fn test_json_output_decodes_to_arguments() -> Result<()> {
    let tera = html_tera(r#"{{ JSON(values=[s, n, flag, nothing, list]) }}"#)?;
    let context = Context::from_value(json!({
        "s": "x <y>",
        "n": 1,
        "flag": true,
        "nothing": null,
        "list": [1.5, "z"],
    }))?;

    let out = tera.render("page.html", &context)?;
    let decoded: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(decoded, json!(["x <y>", 1, true, null, [1.5, "z"]]));
    Ok(())
}
