//! Template environment.
//!
//! Templates live in `templates/` and are embedded at build time. They use a
//! custom block syntax (`{$ ... $}`) so JavaScript braces never collide with
//! template tags; variables keep the usual `{{ ... }}`.

use std::sync::OnceLock;

use minijinja::value::Value;
use minijinja::{AutoEscape, Environment, Error, syntax::SyntaxConfig};
use rust_embed::RustEmbed;
use serde::Serialize;

static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

#[derive(RustEmbed)]
#[folder = "templates"]
struct TemplateAssets;

pub(crate) fn get_env() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| {
        let mut env = Environment::new();

        let syntax = SyntaxConfig::builder()
            .block_delimiters("{$", "$}")
            .variable_delimiters("{{", "}}")
            .line_statement_prefix("$$")
            .build()
            .expect("Failed to configure template syntax");

        env.set_syntax(syntax);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.set_loader(template_loader);

        env.add_filter("js_string", js_string);
        env.add_filter("comment", comment_text);

        env
    })
}

fn template_loader(name: &str) -> Result<Option<String>, Error> {
    Ok(TemplateAssets::get(name)
        .and_then(|file| std::str::from_utf8(file.data.as_ref()).ok().map(str::to_string)))
}

/// Quotes a value as a JavaScript string literal.
///
/// `</` is split so the literal cannot close an enclosing `<script>` element.
fn js_string(value: &Value) -> String {
    let text = value.as_str().map_or_else(|| value.to_string(), str::to_string);
    serde_json::to_string(&text)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

/// Flattens text so it stays inside a single-line comment.
fn comment_text(value: &Value) -> String {
    let text = value.as_str().map_or_else(|| value.to_string(), str::to_string);
    text.replace(['\r', '\n'], " ").replace("</", "< /")
}

/// Renders one embedded template.
///
/// Templates ship with the crate, so a failure here is a packaging bug rather
/// than a runtime condition.
pub(crate) fn render<S: Serialize>(name: &str, ctx: &S) -> String {
    let template = get_env()
        .get_template(name)
        .unwrap_or_else(|e| panic!("Template {name} not found: {e}"));

    template
        .render(ctx)
        .unwrap_or_else(|e| panic!("Template {name} failed to render: {e}"))
}
