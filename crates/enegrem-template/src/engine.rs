//! Page renderer
//!
//! Wraps a minijinja environment holding the embedded page template and the
//! custom filters, and renders a page for a given source/candidate pair.

use crate::error::TemplateResult;
use crate::filters;
use enegrem_config::FrontendConfig;
use enegrem_core::compare;
use minijinja::{context, Environment, Value};
use serde::Serialize;
use tracing::debug;

/// Name of the main page template
pub const PAGE_TEMPLATE: &str = "index.html";

const PAGE_SOURCE: &str = include_str!("../templates/index.html");

/// One letter chip of the count strip
#[derive(Debug, Clone, Serialize)]
struct Chip {
    letter: String,
    count: i64,
}

/// Renders the comparison page
///
/// Cheap to share behind an `Arc`; rendering takes `&self`.
pub struct PageRenderer {
    env: Environment<'static>,
    frontend: FrontendConfig,
}

impl PageRenderer {
    /// Create a renderer with the built-in page template
    pub fn new(frontend: FrontendConfig) -> TemplateResult<Self> {
        Self::with_template(frontend, PAGE_SOURCE)
    }

    /// Create a renderer with a custom page template
    pub fn with_template(frontend: FrontendConfig, source: &'static str) -> TemplateResult<Self> {
        let mut env = Environment::new();
        Self::register_filters(&mut env);
        env.add_template(PAGE_TEMPLATE, source)?;

        Ok(Self { env, frontend })
    }

    fn register_filters(env: &mut Environment<'static>) {
        env.add_filter("count_label", filters::count_label);
        env.add_filter("letter_status", filters::letter_status);
        env.add_filter("letter_cell", filters::letter_cell);
    }

    /// Render the page for the given inputs
    pub fn render_page(&self, source: &str, candidate: &str) -> TemplateResult<String> {
        let comparison = compare(source, candidate);
        debug!(
            "Rendering page: {} source letters, complete={}",
            comparison.source_letters.len(),
            comparison.is_complete
        );

        let chips: Vec<Chip> = comparison
            .letter_count
            .iter()
            .map(|(letter, count)| Chip {
                letter: letter.to_string(),
                count,
            })
            .collect();

        let template = self.env.get_template(PAGE_TEMPLATE)?;
        let html = template.render(context! {
            title => &self.frontend.title,
            theme_color => &self.frontend.theme_color,
            source_placeholder => &self.frontend.source_placeholder,
            source => source,
            candidate => candidate,
            chips => chips,
            comparison => Value::from_serialize(&comparison),
        })?;

        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;

    fn renderer() -> PageRenderer {
        PageRenderer::new(FrontendConfig::default()).unwrap()
    }

    #[test]
    fn test_renders_title_and_theme() {
        let html = renderer().render_page("", "").unwrap();
        assert!(html.contains("<h1>ENEGREM</h1>"));
        assert!(html.contains(r##"content="#f87171""##));
        assert!(html.contains(r#"placeholder="Insert text (i.e. Codroipo)""#));
    }

    #[test]
    fn test_escapes_user_text() {
        let html = renderer()
            .render_page("<script>alert(1)</script>", "")
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_custom_template() {
        let renderer = PageRenderer::with_template(
            FrontendConfig::default(),
            "{% for chip in chips %}{{ chip.letter }}={{ chip.count | count_label }};{% endfor %}",
        )
        .unwrap();
        let html = renderer.render_page("aab", "bc").unwrap();
        assert_eq!(html, "A=2;B=0;C=-1;");
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let result = PageRenderer::with_template(FrontendConfig::default(), "{% if %}");
        assert!(matches!(result, Err(TemplateError::SyntaxError { .. })));
    }
}
