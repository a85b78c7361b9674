//! Article model and derived fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reading pace used for the read-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// The two languages the blog publishes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

/// A published article
///
/// Serialized field names match the JSON wire format of the read API
/// (`translationKey`, `readTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, from the file stem unless overridden
    pub slug: String,

    /// Groups this article with its translations
    pub translation_key: String,

    pub lang: Language,

    pub title: String,

    pub description: String,

    pub category: String,

    /// ISO-like publication date; descending sort key
    pub date: String,

    /// Raw markdown body, front-matter stripped
    pub content: String,

    /// Estimated minutes to read, always at least 1
    pub read_time: u32,
}

/// Estimate reading time in whole minutes.
///
/// Counts whitespace-delimited tokens, markdown syntax included; short
/// or empty bodies still report one minute.
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    (words.div_ceil(WORDS_PER_MINUTE)).max(1) as u32
}

/// Parse a front-matter date string into a calendar date.
///
/// Display formatting only; ordering stays lexicographic on the raw
/// string so the sort never depends on parse success.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // RFC 3339 timestamps, e.g. from exported CMS content
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}
