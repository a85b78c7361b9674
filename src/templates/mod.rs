//! Embedded HTML templates using the Tera template engine
//!
//! All page templates ship inside the binary; there is no theme
//! directory to configure or resolve at runtime.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{parse_date, Article, Language};
use crate::i18n::I18n;

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Template renderer with all page templates embedded
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Article bodies arrive pre-rendered as HTML; escaping is handled
        // where values are produced
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("views/layout.html")),
            ("index.html", include_str!("views/index.html")),
            ("article.html", include_str!("views/article.html")),
            ("not_found.html", include_str!("views/not_found.html")),
        ])?;

        tera.register_filter("date_format", date_format_filter);
        tera.register_filter("escape_html", escape_html_filter);

        Ok(Self { tera })
    }

    /// The listing shell; cards are fetched and filtered client-side
    pub fn render_index(
        &self,
        config: &SiteConfig,
        i18n: &I18n,
        lang: Language,
    ) -> Result<String> {
        let mut context = self.base_context(config, i18n, lang);
        context.insert("page", "index");
        Ok(self.tera.render("index.html", &context)?)
    }

    /// A single server-rendered article page
    pub fn render_article(
        &self,
        config: &SiteConfig,
        i18n: &I18n,
        article: &Article,
        body_html: &str,
    ) -> Result<String> {
        let mut context = self.base_context(config, i18n, article.lang);
        context.insert("page", "article");
        context.insert("article", article);
        context.insert("body", body_html);
        Ok(self.tera.render("article.html", &context)?)
    }

    pub fn render_not_found(
        &self,
        config: &SiteConfig,
        i18n: &I18n,
        lang: Language,
    ) -> Result<String> {
        let mut context = self.base_context(config, i18n, lang);
        context.insert("page", "not_found");
        Ok(self.tera.render("not_found.html", &context)?)
    }

    fn base_context(&self, config: &SiteConfig, i18n: &I18n, lang: Language) -> Context {
        let mut context = Context::new();
        context.insert("site", config);
        context.insert("lang", lang.as_str());
        context.insert("t", i18n.table(lang));
        context
    }
}

/// Tera filter: format an ISO-like date for display.
///
/// English gets "January 15, 2024"; Spanish gets "15 de enero de 2024".
/// Unparseable dates come back unchanged.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let lang = args
        .get("lang")
        .and_then(|v| v.as_str())
        .unwrap_or("en")
        .to_string();

    let Some(date) = parse_date(&s) else {
        return Ok(tera::Value::String(s));
    };

    use chrono::Datelike;
    let formatted = if lang == "es" {
        format!(
            "{} de {} de {}",
            date.day(),
            SPANISH_MONTHS[date.month0() as usize],
            date.year()
        )
    } else {
        date.format("%B %-d, %Y").to_string()
    };

    Ok(tera::Value::String(formatted))
}

/// Tera filter: HTML-escape a value (autoescaping is off globally)
fn escape_html_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("escape_html", "value", String, value);
    let escaped = s
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;");
    Ok(tera::Value::String(escaped))
}
