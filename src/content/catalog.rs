//! Content catalog - loads and queries articles from the content directory

use anyhow::Result;
use indexmap::IndexSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{estimate_read_time, Article, FrontMatter, Language};

/// Queries over a directory of markdown articles.
///
/// Every query re-scans the directory; there is no cache to invalidate
/// when content changes on disk. At blog scale the repeated I/O is
/// cheaper than staleness bugs. Callers only see the query interface, so
/// a cache can be added here later without touching them.
pub struct ContentCatalog {
    content_dir: PathBuf,
}

impl ContentCatalog {
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load every article, newest first.
    ///
    /// A missing content directory is created and yields an empty list.
    /// Files that fail to read or parse are logged and skipped; the rest
    /// of the scan survives. Equal dates keep file-name order.
    pub fn list_all(&self) -> Result<Vec<Article>> {
        if !self.content_dir.exists() {
            fs::create_dir_all(&self.content_dir)?;
            tracing::info!("Created content directory {:?}", self.content_dir);
            return Ok(Vec::new());
        }

        let mut articles = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match load_article(path) {
                    Ok(article) => articles.push(article),
                    Err(e) => {
                        tracing::warn!("Failed to load article {:?}: {}", path, e);
                    }
                }
            }
        }

        // Stable sort: ties keep enumeration order
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(articles)
    }

    /// Articles in one language, an order-preserving subsequence of
    /// [`list_all`](Self::list_all).
    pub fn list_by_language(&self, lang: Language) -> Result<Vec<Article>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|article| article.lang == lang)
            .collect())
    }

    /// Look up one article by identifier; first match wins.
    pub fn get_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        Ok(self
            .list_all()?
            .into_iter()
            .find(|article| article.slug == slug))
    }

    /// The article in `translation_key`'s group written in `lang`.
    ///
    /// `None` is the normal result for an article that has not been
    /// translated yet.
    pub fn find_sibling(&self, translation_key: &str, lang: Language) -> Result<Option<Article>> {
        Ok(self.list_all()?.into_iter().find(|article| {
            article.translation_key == translation_key && article.lang == lang
        }))
    }

    /// Distinct categories for one language, in order of first occurrence.
    pub fn categories(&self, lang: Language) -> Result<Vec<String>> {
        let mut seen = IndexSet::new();
        for article in self.list_by_language(lang)? {
            seen.insert(article.category);
        }
        Ok(seen.into_iter().collect())
    }
}

/// Build an Article from a single markdown file
fn load_article(path: &Path) -> Result<Article> {
    let raw = fs::read_to_string(path)?;
    let (fm, body) = FrontMatter::parse(&raw)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let slug = fm.slug.unwrap_or_else(|| stem.clone());
    let translation_key = fm.translation_key.unwrap_or_else(|| slug.clone());

    Ok(Article {
        slug,
        translation_key,
        lang: fm.lang.unwrap_or_default(),
        title: fm.title.unwrap_or_default(),
        description: fm.description.unwrap_or_default(),
        category: fm.category.unwrap_or_default(),
        date: fm.date.unwrap_or_default(),
        read_time: estimate_read_time(body),
        content: body.to_string(),
    })
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_article(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    fn hello_pair(dir: &Path) {
        write_article(
            dir,
            "hello-en.md",
            "---\ntitle: Hello\ndate: 2024-01-01\ntranslationKey: hello\nlang: en\n---\nHi there.\n",
        );
        write_article(
            dir,
            "hello-es.md",
            "---\ntitle: Hola\ndate: 2024-01-02\ntranslationKey: hello\nlang: es\n---\nHola a todos.\n",
        );
    }

    #[test]
    fn test_missing_directory_is_created_and_empty() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("content");
        let catalog = ContentCatalog::new(&dir);

        assert!(catalog.list_all().unwrap().is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_list_all_sorts_newest_first() {
        let tmp = TempDir::new().unwrap();
        hello_pair(tmp.path());
        let catalog = ContentCatalog::new(tmp.path());

        let articles = catalog.list_all().unwrap();
        let slugs: Vec<_> = articles.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["hello-es", "hello-en"]);
    }

    #[test]
    fn test_fields_and_read_time() {
        let tmp = TempDir::new().unwrap();
        write_article(
            tmp.path(),
            "post.md",
            "---\ntitle: A Post\ndescription: About things\ncategory: notes\ndate: 2024-03-05\nlang: en\n---\nSome body text.\n",
        );
        let catalog = ContentCatalog::new(tmp.path());

        let articles = catalog.list_all().unwrap();
        assert_eq!(articles.len(), 1);
        let article = &articles[0];
        assert_eq!(article.slug, "post");
        assert_eq!(article.translation_key, "post");
        assert_eq!(article.title, "A Post");
        assert_eq!(article.description, "About things");
        assert_eq!(article.category, "notes");
        assert_eq!(article.content.trim(), "Some body text.");
        assert!(article.read_time >= 1);
    }

    #[test]
    fn test_slug_override_from_frontmatter() {
        let tmp = TempDir::new().unwrap();
        write_article(
            tmp.path(),
            "2024-01-old-name.md",
            "---\ntitle: Renamed\nslug: new-name\nlang: en\n---\nBody.\n",
        );
        let catalog = ContentCatalog::new(tmp.path());

        let article = catalog.get_by_slug("new-name").unwrap();
        assert!(article.is_some());
        // Translation key follows the overridden identifier
        assert_eq!(article.unwrap().translation_key, "new-name");
    }

    #[test]
    fn test_non_markdown_files_are_ignored() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "notes.txt", "not an article");
        write_article(tmp.path(), "post.md", "---\nlang: en\n---\nBody.\n");
        let catalog = ContentCatalog::new(tmp.path());

        assert_eq!(catalog.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_broken_file_is_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        write_article(tmp.path(), "bad.md", "---\ntitle: [oops\n---\nBody.\n");
        hello_pair(tmp.path());
        let catalog = ContentCatalog::new(tmp.path());

        let articles = catalog.list_all().unwrap();
        assert_eq!(articles.len(), 2);
    }

    #[test]
    fn test_list_by_language_is_ordered_subsequence() {
        let tmp = TempDir::new().unwrap();
        hello_pair(tmp.path());
        write_article(
            tmp.path(),
            "extra-es.md",
            "---\ntitle: Extra\ndate: 2023-12-01\ntranslationKey: extra\nlang: es\n---\nMas.\n",
        );
        let catalog = ContentCatalog::new(tmp.path());

        let spanish = catalog.list_by_language(Language::Es).unwrap();
        let slugs: Vec<_> = spanish.iter().map(|a| a.slug.as_str()).collect();
        assert_eq!(slugs, vec!["hello-es", "extra-es"]);
        assert!(spanish.iter().all(|a| a.lang == Language::Es));
    }

    #[test]
    fn test_find_sibling() {
        let tmp = TempDir::new().unwrap();
        hello_pair(tmp.path());
        let catalog = ContentCatalog::new(tmp.path());

        let sibling = catalog.find_sibling("hello", Language::Es).unwrap();
        assert_eq!(sibling.unwrap().slug, "hello-es");

        // Untranslated group: an empty result, never an error
        assert!(catalog.find_sibling("missing", Language::En).unwrap().is_none());
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        let tmp = TempDir::new().unwrap();
        write_article(
            tmp.path(),
            "a.md",
            "---\ntitle: A\ndate: 2024-03-01\ncategory: ai\nlang: en\n---\nA.\n",
        );
        write_article(
            tmp.path(),
            "b.md",
            "---\ntitle: B\ndate: 2024-02-01\ncategory: rust\nlang: en\n---\nB.\n",
        );
        write_article(
            tmp.path(),
            "c.md",
            "---\ntitle: C\ndate: 2024-01-01\ncategory: ai\nlang: en\n---\nC.\n",
        );
        let catalog = ContentCatalog::new(tmp.path());

        assert_eq!(catalog.categories(Language::En).unwrap(), vec!["ai", "rust"]);
        assert!(catalog.categories(Language::Es).unwrap().is_empty());
    }

    #[test]
    fn test_queries_are_idempotent() {
        let tmp = TempDir::new().unwrap();
        hello_pair(tmp.path());
        let catalog = ContentCatalog::new(tmp.path());

        assert_eq!(catalog.list_all().unwrap(), catalog.list_all().unwrap());
        assert_eq!(
            catalog.categories(Language::En).unwrap(),
            catalog.categories(Language::En).unwrap()
        );
    }
}
