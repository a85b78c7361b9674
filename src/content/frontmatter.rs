//! Front-matter parsing

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use super::Language;

/// Front-matter metadata from an article file
///
/// All fields are optional in the source file; defaulting rules live in
/// the catalog, which turns this record into an [`super::Article`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    /// Identifier override; the file stem is used when absent
    pub slug: Option<String>,
    /// Links this article to its translations; defaults to the identifier
    #[serde(rename = "translationKey")]
    pub translation_key: Option<String>,
    pub lang: Option<Language>,
}

impl FrontMatter {
    /// Parse front-matter from a file's raw content.
    /// Returns (front_matter, body).
    ///
    /// A file without a `---` fence is all body with default metadata.
    /// A fenced block that is not valid YAML is an ingestion failure and
    /// the caller decides what to do with the file.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return Ok((FrontMatter::default(), content));
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = rest.find("\n---") else {
            // Opening fence without a closing one; treat as body
            return Ok((FrontMatter::default(), content));
        };

        let yaml = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter =
            serde_yaml::from_str(yaml).map_err(|e| anyhow!("invalid front-matter: {}", e))?;

        Ok((fm, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_frontmatter() {
        let content = r#"---
title: Hello World
description: A first post
date: 2024-01-15
category: programming
translationKey: hello
lang: en
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.description, Some("A first post".to_string()));
        assert_eq!(fm.date, Some("2024-01-15".to_string()));
        assert_eq!(fm.category, Some("programming".to_string()));
        assert_eq!(fm.translation_key, Some("hello".to_string()));
        assert_eq!(fm.lang, Some(Language::En));
        assert!(body.starts_with("This is the content."));
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let content = "---\ntitle: Sparse\n---\nBody.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Sparse".to_string()));
        assert_eq!(fm.description, None);
        assert_eq!(fm.slug, None);
        assert_eq!(fm.lang, None);
        assert_eq!(body, "Body.\n");
    }

    #[test]
    fn test_no_frontmatter_is_all_body() {
        let content = "Just some markdown.\n\nNo metadata here.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: broken\nnever closed\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unterminated\n---\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let content = "---\nlang: fr\n---\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }
}
