use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    foundation::error::{FolioError, FolioResult},
    prefs::language::Language,
};

const EMBEDDED: [(Language, &str); 3] = [
    (Language::En, include_str!("../../locales/en.json")),
    (Language::Ru, include_str!("../../locales/ru.json")),
    (Language::Am, include_str!("../../locales/am.json")),
];

/// Fallback language for keys a bundle does not define.
pub const FALLBACK: Language = Language::En;

/// Translation bundles keyed by language, addressed with dotted keys such as
/// `projects.items.ecommerce.title`.
///
/// Lookups never fail: a key missing from the requested language falls back
/// to English, and a key missing everywhere renders as the key itself.
#[derive(Clone, Debug)]
pub struct Translations {
    bundles: BTreeMap<Language, Value>,
}

impl Translations {
    /// The locale bundles compiled into the binary.
    pub fn embedded() -> FolioResult<Self> {
        Self::from_sources(EMBEDDED)
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> FolioResult<Self> {
        let mut bundles = BTreeMap::new();
        for (lang, text) in sources {
            let value: Value = serde_json::from_str(text).map_err(|e| {
                FolioError::serde(format!("locale '{}': {e}", lang.code()))
            })?;
            if !value.is_object() {
                return Err(FolioError::validation(format!(
                    "locale '{}' must be a JSON object",
                    lang.code()
                )));
            }
            bundles.insert(lang, value);
        }
        if !bundles.contains_key(&FALLBACK) {
            return Err(FolioError::validation(format!(
                "fallback locale '{}' is required",
                FALLBACK.code()
            )));
        }
        Ok(Self { bundles })
    }

    fn node(&self, lang: Language, key: &str) -> Option<&Value> {
        let mut node = self.bundles.get(&lang)?;
        for part in key.split('.') {
            node = match node {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }

    /// Raw value for `key`, after language fallback.
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&Value> {
        self.node(lang, key)
            .or_else(|| self.node(FALLBACK, key))
    }

    /// Display string for `key`.
    pub fn t(&self, lang: Language, key: &str) -> String {
        match self.lookup(lang, key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                tracing::debug!(lang = lang.code(), key, "missing translation");
                key.to_string()
            }
        }
    }

    /// Like [`Translations::t`], replacing `{{name}}` placeholders.
    pub fn t_with(&self, lang: Language, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(lang, key);
        for (name, value) in args {
            out = out.replace(&format!("{{{{{name}}}}}"), value);
        }
        out
    }

    /// Array of objects under `key` (e.g. the about cards), each flattened to
    /// its string fields.
    pub fn list(&self, lang: Language, key: &str) -> Vec<BTreeMap<String, String>> {
        let Some(Value::Array(items)) = self.lookup(lang, key) else {
            return Vec::new();
        };
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .collect()
    }

    /// Leaf keys present in the fallback bundle but not in `lang`.
    pub fn missing_keys(&self, lang: Language) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.bundles.get(&FALLBACK) {
            collect_leaves(root, String::new(), &mut leaves);
        }
        leaves
            .into_iter()
            .filter(|k| self.node(lang, k).is_none())
            .collect()
    }
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    let join = |k: &str| {
        if prefix.is_empty() {
            k.to_string()
        } else {
            format!("{prefix}.{k}")
        }
    };
    match node {
        Value::Object(map) => {
            for (k, v) in map {
                collect_leaves(v, join(k), out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                collect_leaves(v, join(&i.to_string()), out);
            }
        }
        _ => out.push(prefix),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/i18n/bundle.rs"]
mod tests;
