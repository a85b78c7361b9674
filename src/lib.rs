//! puente: a bilingual markdown blog engine
//!
//! Articles are markdown files with YAML front-matter in a content
//! directory. The server exposes them through a small JSON read API and
//! as rendered pages, pairing each article with its translation sibling
//! so readers can switch languages mid-article.

pub mod config;
pub mod content;
pub mod i18n;
pub mod relay;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding the markdown articles
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Catalog over this site's content directory
    pub fn catalog(&self) -> content::ContentCatalog {
        content::ContentCatalog::new(self.content_dir.clone())
    }
}
