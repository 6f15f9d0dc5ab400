use crate::domain::constants::{APP_CONFIG_DIR, STORAGE_KEY};
use crate::domain::models::Configuration;
use std::cell::RefCell;
use std::path::PathBuf;

/// Opaque load/save of the configuration blob. Best-effort in both
/// directions: failures read as "nothing stored" and are never raised.
pub trait ConfigStore {
    fn load(&self) -> Option<serde_json::Value>;
    fn save(&self, config: &Configuration) -> bool;
    fn location(&self) -> String;
}

pub fn app_config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(APP_CONFIG_DIR))
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> anyhow::Result<Self> {
        Ok(Self::new(
            app_config_dir()?.join(format!("{}.json", STORAGE_KEY)),
        ))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn load(&self) -> Option<serde_json::Value> {
        if !self.path.exists() {
            return None;
        }
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("ignoring unreadable {}: {}", self.path.display(), e);
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        match parse_blob(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&self, config: &Configuration) -> bool {
        let write = || -> anyhow::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, serde_json::to_string_pretty(config)?)?;
            Ok(())
        };
        match write() {
            Ok(()) => {
                log::debug!("saved configuration to {}", self.path.display());
                true
            }
            Err(e) => {
                log::warn!("could not save {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn location(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// In-process store; holds the serialized blob exactly as a file would.
#[derive(Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn with_blob(raw: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(raw.into())),
        }
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Option<serde_json::Value> {
        self.blob
            .borrow()
            .as_deref()
            .and_then(|raw| parse_blob(raw).ok())
    }

    fn save(&self, config: &Configuration) -> bool {
        match serde_json::to_string(config) {
            Ok(raw) => {
                *self.blob.borrow_mut() = Some(raw);
                true
            }
            Err(_) => false,
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

impl<T: ConfigStore + ?Sized> ConfigStore for Box<T> {
    fn load(&self) -> Option<serde_json::Value> {
        (**self).load()
    }

    fn save(&self, config: &Configuration) -> bool {
        (**self).save(config)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Parses a stored blob. Numbers too large for `f64` would otherwise fail the
/// whole document, so they are read back as the strings `"Infinity"` /
/// `"-Infinity"`; `merge` then rejects them field by field.
pub fn parse_blob(raw: &str) -> serde_json::Result<serde_json::Value> {
    match serde_json::from_str(raw) {
        Ok(v) => Ok(v),
        Err(first) => match serde_json::from_str(&saturate_overflowing_numbers(raw)) {
            Ok(v) => {
                log::debug!("stored blob had out-of-range numbers: {}", first);
                Ok(v)
            }
            Err(_) => Err(first),
        },
    }
}

fn saturate_overflowing_numbers(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();
    let mut in_string = false;
    let mut escaped = false;
    while let Some((start, c)) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }
        if c != '-' && !c.is_ascii_digit() {
            out.push(c);
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, n)) = chars.peek() {
            if n.is_ascii_digit() || matches!(n, '.' | 'e' | 'E' | '+' | '-') {
                end = i + n.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        let token = &raw[start..end];
        match token.parse::<f64>() {
            Ok(f) if f.is_infinite() && f > 0.0 => out.push_str("\"Infinity\""),
            Ok(f) if f.is_infinite() => out.push_str("\"-Infinity\""),
            _ => out.push_str(token),
        }
    }
    out
}

/// File store under `$HOME`, or a memory store when `$HOME` is unavailable.
pub fn default_store() -> Box<dyn ConfigStore> {
    match FileStore::default_location() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("no home directory ({}); configuration will not persist", e);
            Box::new(MemoryStore::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_blob, ConfigStore, FileStore, MemoryStore};
    use crate::catalog::Registry;
    use crate::cli::CatalogKind;
    use crate::services::configuration::build_default;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_camel_case_blob() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("nested/dir/blob.json"));
        assert!(store.load().is_none());

        let cfg = build_default(&Registry::builtin(CatalogKind::Classic).unwrap());
        assert!(store.save(&cfg));

        let loaded = store.load().expect("stored blob");
        assert_eq!(loaded["maxItems"], 10);
        assert_eq!(loaded["excludeSensitive"], true);
        assert_eq!(loaded["selected"]["working_style"], true);
    }

    #[test]
    fn file_store_treats_garbage_as_absent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blob.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(FileStore::new(path.clone()).load().is_none());
        std::fs::write(&path, "   ").unwrap();
        assert!(FileStore::new(path).load().is_none());
    }

    #[test]
    fn file_store_swallows_write_failures() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let store = FileStore::new(blocker.join("blob.json"));
        let cfg = build_default(&Registry::builtin(CatalogKind::Classic).unwrap());
        assert!(!store.save(&cfg));
    }

    #[test]
    fn overflowing_numbers_do_not_discard_the_blob() {
        let v = parse_blob(
            r#"{"selected":{"food":true,"note":"1e400 \" -9e999"},"maxItems":1e400,"x":-2E+999,"y":1.5}"#,
        )
        .expect("lenient parse");
        assert_eq!(v["selected"]["food"], true);
        assert_eq!(v["selected"]["note"], "1e400 \" -9e999");
        assert_eq!(v["maxItems"], "Infinity");
        assert_eq!(v["x"], "-Infinity");
        assert_eq!(v["y"], 1.5);

        assert!(parse_blob("{not json").is_err());
    }

    #[test]
    fn file_store_keeps_selection_next_to_overflowing_number() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blob.json");
        std::fs::write(&path, r#"{"selected":{"food":true},"maxItems":1e400}"#).unwrap();
        let loaded = FileStore::new(path).load().expect("blob survives");
        assert_eq!(loaded["selected"]["food"], true);
    }

    #[test]
    fn memory_store_keeps_serialized_blob() {
        let store = MemoryStore::with_blob("[1,2,3]");
        assert_eq!(store.load(), Some(serde_json::json!([1, 2, 3])));
        let cfg = build_default(&Registry::builtin(CatalogKind::Classic).unwrap());
        assert!(store.save(&cfg));
        assert!(store.blob().unwrap().contains("\"includeInferred\":true"));
    }
}
