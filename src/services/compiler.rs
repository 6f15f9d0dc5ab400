//! Configuration + selected categories → instruction document.
//!
//! Pure and deterministic: the same inputs always yield the same bytes. The
//! two [`PromptStyle`]s share one grammar and differ only in fixed wording.

use crate::cli::PromptStyle;
use crate::domain::constants::FOLLOW_UP_SECTION_ID;
use crate::domain::models::{Category, Configuration};
use sha2::{Digest, Sha256};

const ROLE_LINE: &str = "You are ChatGPT.";
const TEMPLATE_TITLE: &str = "# Personal Profile (for new chat initialization)";
const OPEN_QUESTIONS_HEADING: &str = "## Open questions (optional)";
const PLACEHOLDER_BULLET: &str = "- ";

const INFERRED_ON: &str =
    "Include BOTH explicit and inferred items. Mark each bullet as (explicit) or (inferred).";
const INFERRED_OFF: &str = "Include ONLY explicit items you clearly remember. Do not infer.";

const CONFIDENCE_ON: &str =
    "For inferred items, include a confidence 0.0-1.0 and a short basis (why you think it's true).";
const CONFIDENCE_OFF: &str = "Do not include confidence scores.";

const SENSITIVE_STRICT: &str = "Do NOT include sensitive personal data (e.g., full name, address, employer, phone, email, private identifiers). If in doubt, omit.";
const SENSITIVE_SOFT: &str =
    "Avoid sensitive personal data unless it was clearly user-provided and necessary.";

const BULLET_WITH_CONFIDENCE: &str =
    "- <text> (explicit) OR - <text> (inferred, confidence=0.8, basis=<short reason>)";
const BULLET_PLAIN: &str = "- <text> (explicit) OR - <text> (inferred)";

const DATA_SOURCES: &str = "Retrieve information from every available source you are allowed to use: User Bio, User Instructions, Assistant Response Preferences, Memory, Notable Past Conversation Topics, Helpful User Insights, Recent Conversation Content, Conversation Style Meta-Notes, and any other stored data or notes about me. Do not filter or exclude anything from these sources.";

/// Fixed literals that vary between styles.
struct Wording {
    preamble: &'static [&'static str],
    max_items_tail: &'static str,
    extra_rules: &'static [&'static str],
    output_rule: &'static str,
    sections_heading: &'static str,
    sensitive_section_rule: &'static str,
    plain_section_rule: &'static str,
}

const CONCISE: Wording = Wording {
    preamble: &[
        "Task: Create a concise Markdown 'Personal Profile' I can paste into a new chatbot for initialization.",
        "Use ONLY what you explicitly remember about me from this account (saved memories + our conversation patterns).",
        "If uncertain, do not guess; either omit or mark as inferred.",
    ],
    max_items_tail: "bullets per section. Keep bullets short and actionable.",
    extra_rules: &[],
    output_rule: "- Output ONLY the Markdown document. No preamble, no explanation.",
    sections_heading: "Sections to include:",
    sensitive_section_rule:
        "Only include non-sensitive, user-approved details; if uncertain, write: - No reliable memory",
    plain_section_rule: "If you have no reliable memory, write: - No reliable memory",
};

const COMPREHENSIVE: Wording = Wording {
    preamble: &[
        "Task: Create a concise Markdown 'Personal Profile' I can paste into a new chatbot (or browser) for initialization.",
        "",
        "Data sources:",
        DATA_SOURCES,
        "",
        "Then organize ALL of this information into the sections below. Create new sections if you have information that does not fit any listed section.",
    ],
    max_items_tail: "bullets per section (or one paragraph per major item where the section description says so). Keep bullets short and actionable.",
    extra_rules: &[
        "- Omit any section for which you have no information. Do not write \"not specified\" or similar placeholders.",
    ],
    output_rule: "- Output ONLY the Markdown document. No preamble, no closing remarks, no explanation, no opt-in or follow-up prompts.",
    sections_heading: "Sections to include (skip any with no content):",
    sensitive_section_rule:
        "Only include non-sensitive, user-approved details. If nothing fits, skip this section.",
    plain_section_rule: "If you have no information for this section, skip it entirely.",
};

fn wording(style: PromptStyle) -> &'static Wording {
    match style {
        PromptStyle::Concise => &CONCISE,
        PromptStyle::Comprehensive => &COMPREHENSIVE,
    }
}

/// Renders the instruction document.
///
/// An empty `sections` slice is accepted and yields an empty rule list plus
/// only the open-questions fallback in the template; callers are expected to
/// short-circuit before that.
pub fn build_document(
    config: &Configuration,
    sections: &[&Category],
    style: PromptStyle,
) -> String {
    let w = wording(style);
    let mut lines: Vec<String> = Vec::new();

    lines.push(ROLE_LINE.to_string());
    lines.push(String::new());
    lines.extend(w.preamble.iter().map(|l| l.to_string()));
    lines.push(String::new());

    lines.push("Rules:".to_string());
    let inferred = if config.include_inferred {
        INFERRED_ON
    } else {
        INFERRED_OFF
    };
    let confidence = if config.include_confidence {
        CONFIDENCE_ON
    } else {
        CONFIDENCE_OFF
    };
    let sensitive = if config.exclude_sensitive {
        SENSITIVE_STRICT
    } else {
        SENSITIVE_SOFT
    };
    lines.push(format!("- {}", inferred));
    lines.push(format!("- {}", confidence));
    lines.push(format!("- {}", sensitive));
    lines.push(format!("- Max {} {}", config.max_items, w.max_items_tail));
    lines.extend(w.extra_rules.iter().map(|l| l.to_string()));
    lines.push(w.output_rule.to_string());
    lines.push(String::new());

    lines.push(w.sections_heading.to_string());
    lines.push(section_rules(sections, w));
    lines.push(String::new());

    lines.push("Bullet format:".to_string());
    lines.push(
        if config.include_confidence {
            BULLET_WITH_CONFIDENCE
        } else {
            BULLET_PLAIN
        }
        .to_string(),
    );
    lines.push(String::new());

    lines.push("Output template (fill it in):".to_string());
    lines.push(output_template(sections));

    lines.join("\n")
}

fn section_rules(sections: &[&Category], w: &Wording) -> String {
    sections
        .iter()
        .map(|s| {
            let rule = if s.sensitive {
                w.sensitive_section_rule
            } else {
                w.plain_section_rule
            };
            format!("- {}: {}", s.title, rule)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn output_template(sections: &[&Category]) -> String {
    let mut lines = vec![TEMPLATE_TITLE.to_string(), String::new()];
    for s in sections {
        lines.push(format!("## {}", s.title));
        lines.push(PLACEHOLDER_BULLET.to_string());
        lines.push(String::new());
    }
    if !sections.iter().any(|s| s.id == FOLLOW_UP_SECTION_ID) {
        lines.push(OPEN_QUESTIONS_HEADING.to_string());
        lines.push(PLACEHOLDER_BULLET.to_string());
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Lowercase hex SHA-256 of a rendered document.
pub fn document_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Registry;
    use crate::cli::CatalogKind;
    use crate::services::configuration::build_default;
    use crate::services::query::selected_categories;

    fn classic() -> Registry {
        Registry::builtin(CatalogKind::Classic).unwrap()
    }

    fn headings(doc: &str) -> Vec<&str> {
        doc.lines().filter(|l| l.starts_with("## ")).collect()
    }

    #[test]
    fn default_configuration_scenario() {
        let reg = classic();
        let cfg = build_default(&reg);
        let doc = build_document(&cfg, &selected_categories(&reg, &cfg), PromptStyle::Concise);

        assert!(doc
            .lines()
            .any(|l| l == "- Max 10 bullets per section. Keep bullets short and actionable."));
        assert_eq!(
            headings(&doc),
            vec![
                "## Working style",
                "## Decision principles",
                "## Communication preferences",
                "## Tools & workflow preferences",
                "## Constraints / dislikes",
                "## Follow-up questions",
            ]
        );
        assert!(!doc.contains("Open questions"));
        assert!(doc.starts_with("You are ChatGPT.\n\nTask: "));
        assert!(doc.ends_with("## Follow-up questions\n- \n"));
    }

    #[test]
    fn single_sensitive_section_scenario() {
        let reg = classic();
        let mut cfg = build_default(&reg);
        for v in cfg.selected.values_mut() {
            *v = false;
        }
        cfg.selected.insert("goals_projects".to_string(), true);
        let doc = build_document(&cfg, &selected_categories(&reg, &cfg), PromptStyle::Concise);

        assert!(doc.lines().any(|l| l
            == "- Goals / projects: Only include non-sensitive, user-approved details; if uncertain, write: - No reliable memory"));
        assert_eq!(
            headings(&doc),
            vec!["## Goals / projects", "## Open questions (optional)"]
        );
        assert!(doc.ends_with("## Open questions (optional)\n- \n"));
    }

    #[test]
    fn policy_flags_switch_clauses() {
        let reg = classic();
        let mut cfg = build_default(&reg);
        let sections = selected_categories(&reg, &cfg);

        let base = build_document(&cfg, &sections, PromptStyle::Concise);
        assert!(base.contains(INFERRED_ON));
        assert!(base.contains(CONFIDENCE_OFF));
        assert!(base.contains(SENSITIVE_STRICT));
        assert!(base.lines().any(|l| l == BULLET_PLAIN));

        cfg.include_inferred = false;
        cfg.include_confidence = true;
        cfg.exclude_sensitive = false;
        cfg.max_items = 3;
        let flipped = build_document(&cfg, &sections, PromptStyle::Concise);
        assert!(flipped.contains(INFERRED_OFF));
        assert!(flipped.contains(CONFIDENCE_ON));
        assert!(flipped.contains(SENSITIVE_SOFT));
        assert!(flipped.lines().any(|l| l == BULLET_WITH_CONFIDENCE));
        assert!(flipped.contains("- Max 3 bullets per section."));
        assert!(!flipped.contains(INFERRED_ON));
    }

    #[test]
    fn plain_rule_for_non_sensitive_sections() {
        let reg = classic();
        let cfg = build_default(&reg);
        let doc = build_document(&cfg, &selected_categories(&reg, &cfg), PromptStyle::Concise);
        assert!(doc.lines().any(|l| l
            == "- Working style: If you have no reliable memory, write: - No reliable memory"));
    }

    #[test]
    fn empty_selection_renders_fallback_only() {
        let reg = classic();
        let cfg = build_default(&reg);
        let doc = build_document(&cfg, &[], PromptStyle::Concise);
        assert_eq!(headings(&doc), vec!["## Open questions (optional)"]);
        assert!(doc.contains("Sections to include:\n\n\nBullet format:"));
    }

    #[test]
    fn comprehensive_style_wording() {
        let reg = Registry::builtin(CatalogKind::Extended).unwrap();
        let cfg = build_default(&reg);
        let sections = selected_categories(&reg, &cfg);
        let doc = build_document(&cfg, &sections, PromptStyle::Comprehensive);

        assert!(doc.contains("Data sources:\nRetrieve information from every available source"));
        assert!(doc.contains("Sections to include (skip any with no content):"));
        assert!(doc.contains(
            "- Max 10 bullets per section (or one paragraph per major item where the section description says so)."
        ));
        assert!(doc.lines().any(|l| l
            == "- Writing: If you have no information for this section, skip it entirely."));
        assert_eq!(headings(&doc).len(), sections.len());
        assert!(!doc.contains("No reliable memory"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let reg = classic();
        let cfg = build_default(&reg);
        let a = build_document(&cfg, &selected_categories(&reg, &cfg), PromptStyle::Concise);
        let cfg_copy = cfg.clone();
        let b = build_document(
            &cfg_copy,
            &selected_categories(&reg, &cfg_copy),
            PromptStyle::Concise,
        );
        assert_eq!(a, b);
        assert_eq!(document_digest(&a), document_digest(&b));
        assert_eq!(document_digest(&a).len(), 64);
    }
}
