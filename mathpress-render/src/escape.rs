//! Output escaping for rendered artifacts.

/// Replace `{` and `}` with their character references so the site
/// generator's template language does not reinterpret rendered HTML as
/// template syntax.
pub fn escape_template_braces(rendered: &str) -> String {
    rendered.replace('{', "&#123;").replace('}', "&#125;")
}
