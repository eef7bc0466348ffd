//! JSON translation catalogs.
//!
//! Catalogs live in `<lang_dir>/<locale>/<namespace>.json`, each file a flat
//! object of string values. A value is looked up as `<namespace>.<key>`, so
//! `resources/lang/nl/paginateroute.json` provides `paginateroute.page`.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::errors::TranslationError;

/// Translations for one locale, merged over its fallback locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Load `locale` from `lang_dir`, with `fallback` filling missing keys.
    ///
    /// A missing locale directory is not an error; an unreadable or malformed
    /// catalog file is.
    pub fn load(
        lang_dir: impl AsRef<Path>,
        locale: &str,
        fallback: &str,
    ) -> Result<Self, TranslationError> {
        let lang_dir = lang_dir.as_ref();
        let mut entries = HashMap::new();

        if fallback != locale {
            load_locale(lang_dir, fallback, &mut entries)?;
        }
        load_locale(lang_dir, locale, &mut entries)?;

        info!(
            "Loaded {} translation(s) for locale '{}' from {}",
            entries.len(),
            locale,
            lang_dir.display()
        );

        Ok(Self {
            locale: locale.to_string(),
            entries,
        })
    }

    /// Build a catalog from `(key, value)` pairs already in `<namespace>.<key>` form.
    pub fn from_entries<I, K, V>(locale: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            locale: locale.to_string(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

fn load_locale(
    lang_dir: &Path,
    locale: &str,
    entries: &mut HashMap<String, String>,
) -> Result<(), TranslationError> {
    let dir = lang_dir.join(locale);

    let read_dir = match fs::read_dir(&dir) {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("No translations for locale '{}' at {}", locale, dir.display());
            return Ok(());
        }
        Err(source) => return Err(TranslationError::Read { path: dir, source }),
    };

    for entry in read_dir {
        let path = entry
            .map_err(|source| TranslationError::Read {
                path: dir.clone(),
                source,
            })?
            .path();

        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        let Some(namespace) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        let contents = fs::read_to_string(&path).map_err(|source| TranslationError::Read {
            path: path.clone(),
            source,
        })?;
        let values: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| TranslationError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(
            "Read {} key(s) from {} for locale '{}'",
            values.len(),
            path.display(),
            locale
        );

        entries.extend(
            values
                .into_iter()
                .map(|(key, value)| (format!("{}.{}", namespace, key), value)),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn lang_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/lang")
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "paginate-route-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_loads_shipped_catalogs() {
        let en = Catalog::load(lang_dir(), "en", "en").unwrap();
        assert_eq!(en.get("paginateroute.page"), Some("page"));

        let nl = Catalog::load(lang_dir(), "nl", "en").unwrap();
        assert_eq!(nl.locale(), "nl");
        assert_eq!(nl.get("paginateroute.page"), Some("pagina"));

        let de = Catalog::load(lang_dir(), "de", "en").unwrap();
        assert_eq!(de.get("paginateroute.page"), Some("seite"));
    }

    #[test]
    fn test_unknown_locale_uses_fallback() {
        let catalog = Catalog::load(lang_dir(), "xx", "en").unwrap();
        assert_eq!(catalog.get("paginateroute.page"), Some("page"));
    }

    #[test]
    fn test_missing_directory_has_no_entries() {
        let catalog = Catalog::load("/nonexistent/lang", "en", "en").unwrap();
        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.get("paginateroute.page"), None);
    }

    #[test]
    fn test_locale_overrides_fallback() {
        let dir = scratch_dir("override");
        fs::create_dir_all(dir.join("en")).unwrap();
        fs::create_dir_all(dir.join("fr")).unwrap();
        fs::write(
            dir.join("en/paginateroute.json"),
            r#"{"page": "page", "next": "next"}"#,
        )
        .unwrap();
        fs::write(dir.join("fr/paginateroute.json"), r#"{"next": "suivant"}"#).unwrap();
        fs::write(dir.join("fr/notes.txt"), "ignored").unwrap();

        let catalog = Catalog::load(&dir, "fr", "en").unwrap();
        assert_eq!(catalog.get("paginateroute.missing"), None);
        assert_eq!(catalog.get("paginateroute.page"), Some("page"));
        assert_eq!(catalog.get("paginateroute.next"), Some("suivant"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(dir.join("en")).unwrap();
        fs::write(dir.join("en/paginateroute.json"), "{ not json").unwrap();

        let err = Catalog::load(&dir, "en", "en").unwrap_err();
        assert!(matches!(err, TranslationError::Parse { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
