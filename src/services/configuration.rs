use crate::catalog::Registry;
use crate::cli::Preset;
use crate::domain::constants::{DEFAULT_MAX_ITEMS, MAX_ITEMS_MAX, MAX_ITEMS_MIN};
use crate::domain::models::{Configuration, FlagUpdate};
use serde_json::Value;
use std::collections::BTreeMap;

pub fn build_default(registry: &Registry) -> Configuration {
    Configuration {
        selected: registry
            .categories()
            .iter()
            .map(|c| (c.id.clone(), c.recommended))
            .collect(),
        include_inferred: true,
        include_confidence: false,
        exclude_sensitive: true,
        max_items: DEFAULT_MAX_ITEMS,
    }
}

/// Overlays untrusted persisted data onto `base`, field by field.
///
/// Only ids already present in `base.selected` are read from `incoming`, so
/// ids the registry no longer knows are dropped and new ones keep their
/// defaults. Every scalar that fails its type guard falls back to `base`.
pub fn merge(base: &Configuration, incoming: Option<&Value>) -> Configuration {
    let Some(Value::Object(incoming)) = incoming else {
        return base.clone();
    };

    let mut selected = base.selected.clone();
    if let Some(Value::Object(stored)) = incoming.get("selected") {
        for (id, flag) in selected.iter_mut() {
            if let Some(v) = stored.get(id) {
                *flag = truthy(v);
            }
        }
    }

    let bool_field = |key: &str, fallback: bool| match incoming.get(key) {
        Some(Value::Bool(b)) => *b,
        _ => fallback,
    };

    Configuration {
        selected,
        include_inferred: bool_field("includeInferred", base.include_inferred),
        include_confidence: bool_field("includeConfidence", base.include_confidence),
        exclude_sensitive: bool_field("excludeSensitive", base.exclude_sensitive),
        max_items: match incoming.get("maxItems").and_then(Value::as_f64) {
            Some(n) if n.is_finite() => clamp_number(n, MAX_ITEMS_MIN, MAX_ITEMS_MAX),
            _ => base.max_items,
        },
    }
}

/// Floors `n` and clamps it to `[min, max]`; non-finite input maps to `min`.
pub fn clamp_number(n: f64, min: i64, max: i64) -> i64 {
    let x = n.floor();
    if !x.is_finite() {
        return min;
    }
    if x <= min as f64 {
        min
    } else if x >= max as f64 {
        max
    } else {
        x as i64
    }
}

/// Clamp applied to free-form user input. Blank text counts as zero.
/// Unsigned `0x`/`0o`/`0b` literals are read in their radix; any other
/// text that is not a decimal or float lands on the minimum.
pub fn parse_max_items(raw: &str) -> i64 {
    let t = raw.trim();
    let n = if t.is_empty() {
        0.0
    } else {
        parse_radix_literal(t).unwrap_or_else(|| t.parse::<f64>().unwrap_or(f64::NAN))
    };
    clamp_number(n, MAX_ITEMS_MIN, MAX_ITEMS_MAX)
}

fn parse_radix_literal(t: &str) -> Option<f64> {
    let (radix, digits) = match t.get(..2)? {
        "0x" | "0X" => (16, &t[2..]),
        "0o" | "0O" => (8, &t[2..]),
        "0b" | "0B" => (2, &t[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(u128::from_str_radix(digits, radix).map_or(f64::MAX, |v| v as f64))
}

/// Selection map produced by a bulk action; it replaces the current one.
pub fn preset_selection(registry: &Registry, preset: Preset) -> BTreeMap<String, bool> {
    registry
        .categories()
        .iter()
        .map(|c| {
            let on = match preset {
                Preset::Recommended => c.recommended,
                Preset::All => true,
                Preset::Clear => false,
            };
            (c.id.clone(), on)
        })
        .collect()
}

pub fn preset_status(preset: Preset) -> &'static str {
    match preset {
        Preset::Recommended => "Selected recommended sections.",
        Preset::All => "Selected all sections.",
        Preset::Clear => "Cleared selection.",
    }
}

pub fn apply_flags(config: &Configuration, update: &FlagUpdate) -> Configuration {
    Configuration {
        selected: config.selected.clone(),
        include_inferred: update.include_inferred.unwrap_or(config.include_inferred),
        include_confidence: update
            .include_confidence
            .unwrap_or(config.include_confidence),
        exclude_sensitive: update.exclude_sensitive.unwrap_or(config.exclude_sensitive),
        max_items: update
            .max_items
            .as_deref()
            .map(parse_max_items)
            .unwrap_or(config.max_items),
    }
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
