//! UI string translations (en/es)

use anyhow::Result;
use std::collections::HashMap;

use crate::content::Language;

/// Translation tables for the page chrome.
///
/// The locale files are embedded in the binary; article content carries
/// its own language and never goes through here.
pub struct I18n {
    /// lang -> nested translation tree
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    pub fn new() -> Result<Self> {
        let mut translations = HashMap::new();
        translations.insert("en".to_string(), serde_yaml::from_str(include_str!("en.yml"))?);
        translations.insert("es".to_string(), serde_yaml::from_str(include_str!("es.yml"))?);
        Ok(Self { translations })
    }

    /// Get a translation by dotted key, e.g. "hero.title".
    /// Falls back to English, then to the key itself.
    pub fn get(&self, lang: Language, key: &str) -> String {
        if let Some(table) = self.translations.get(lang.as_str()) {
            if let Some(value) = get_nested_value(table, key) {
                return yaml_value_to_string(value);
            }
        }

        if lang != Language::En {
            if let Some(table) = self.translations.get("en") {
                if let Some(value) = get_nested_value(table, key) {
                    return yaml_value_to_string(value);
                }
            }
        }

        key.to_string()
    }

    /// The whole table for one language, for template contexts
    pub fn table(&self, lang: Language) -> &HashMap<String, serde_yaml::Value> {
        self.translations
            .get(lang.as_str())
            .or_else(|| self.translations.get("en"))
            .expect("embedded locale tables always include en")
    }
}

/// Walk a dotted key through nested YAML mappings
fn get_nested_value<'a>(
    table: &'a HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<&'a serde_yaml::Value> {
    let mut parts = key.split('.');
    let mut current = table.get(parts.next()?)?;

    for part in parts {
        current = current.get(part)?;
    }

    Some(current)
}

fn yaml_value_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_in_both_languages() {
        let i18n = I18n::new().unwrap();
        assert_eq!(i18n.get(Language::En, "filter.all"), "All");
        assert_eq!(i18n.get(Language::Es, "filter.all"), "Todos");
    }

    #[test]
    fn test_nested_keys() {
        let i18n = I18n::new().unwrap();
        assert_eq!(i18n.get(Language::En, "footer.subscribe"), "Subscribe");
        assert_eq!(i18n.get(Language::Es, "footer.subscribe"), "Suscribirse");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        let i18n = I18n::new().unwrap();
        assert_eq!(i18n.get(Language::Es, "no.such.key"), "no.such.key");
    }
}
