//! Site configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::Language;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,

    /// Language served when the visitor has no stored preference
    pub default_language: Language,

    // Directory
    pub content_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Puente".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: String::new(),
            url: "http://localhost:3000".to_string(),
            default_language: Language::En,
            content_dir: "content".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
