//! Heuristic content-type classification
//!
//! Applies a fixed, priority-ordered list of checks and returns the first
//! match. JSON is checked first because it is the only rule backed by an
//! exact parser; everything after it is a best-effort pattern match, so a
//! valid JSON object containing, say, a SQL string literal still classifies
//! as JSON. The order exists to make results deterministic, not correct.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::ContentKind;

static RE_HTML: OnceLock<Regex> = OnceLock::new();
static RE_XML_DECL: OnceLock<Regex> = OnceLock::new();
static RE_XML_NS: OnceLock<Regex> = OnceLock::new();
static RE_SQL: OnceLock<Regex> = OnceLock::new();
static RE_JS: OnceLock<Vec<Regex>> = OnceLock::new();
static RE_TS_ANNOTATION: OnceLock<Regex> = OnceLock::new();
static RE_TS_DECL: OnceLock<Regex> = OnceLock::new();
static RE_PYTHON: OnceLock<Vec<Regex>> = OnceLock::new();
static RE_CSS_SHAPE: OnceLock<Regex> = OnceLock::new();
static RE_CSS_SELECTOR: OnceLock<Regex> = OnceLock::new();
static RE_YAML: OnceLock<Regex> = OnceLock::new();
static RE_MARKDOWN: OnceLock<Vec<Regex>> = OnceLock::new();
static RE_SHELL: OnceLock<Vec<Regex>> = OnceLock::new();

/// Result of classifying a text blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// Detected content type
    pub kind: ContentKind,
    /// Highlighter hint, absent for plain text
    pub language: Option<&'static str>,
    /// Whether the trimmed input parsed as JSON
    pub is_valid_json: bool,
}

impl Detection {
    fn of(kind: ContentKind) -> Self {
        Self {
            kind,
            language: kind.language(),
            is_valid_json: kind == ContentKind::Json,
        }
    }
}

/// Classify arbitrary text into a content-type tag.
///
/// Rules are applied in strict priority order; the first match wins.
pub fn detect_content(content: &str) -> Detection {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Detection::of(ContentKind::Text);
    }

    if serde_json::from_str::<serde_json::Value>(trimmed).is_ok() {
        return Detection::of(ContentKind::Json);
    }

    let re_html = RE_HTML.get_or_init(|| Regex::new(r"(?is)<[a-z].*>").unwrap());
    if re_html.is_match(trimmed) {
        return Detection::of(ContentKind::Html);
    }

    let re_xml_decl = RE_XML_DECL.get_or_init(|| Regex::new(r"(?is)<\?xml.*\?>").unwrap());
    let re_xml_ns = RE_XML_NS.get_or_init(|| Regex::new(r"(?is)<[a-z]+:.*>").unwrap());
    if re_xml_decl.is_match(trimmed) || re_xml_ns.is_match(trimmed) {
        return Detection::of(ContentKind::Xml);
    }

    let re_sql = RE_SQL.get_or_init(|| {
        Regex::new(
            r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|FROM|WHERE|JOIN|INNER|OUTER|LEFT|RIGHT|GROUP BY|ORDER BY|HAVING|UNION|EXEC|EXECUTE)\b",
        )
        .unwrap()
    });
    if re_sql.is_match(trimmed) && trimmed.len() > 20 {
        return Detection::of(ContentKind::Sql);
    }

    let re_js = RE_JS.get_or_init(|| {
        vec![
            Regex::new(r"(?m)^(import|export|const|let|var|function|class|interface|type|enum)\s+")
                .unwrap(),
            Regex::new(r"=>\s*\{?").unwrap(),
            Regex::new(r"console\.(log|error|warn|info)").unwrap(),
            Regex::new(r"\.(map|filter|reduce|forEach)\(").unwrap(),
            Regex::new(r"async\s+function").unwrap(),
            Regex::new(r"await\s+").unwrap(),
        ]
    });
    if re_js.iter().any(|re| re.is_match(trimmed)) {
        let re_annotation = RE_TS_ANNOTATION.get_or_init(|| {
            Regex::new(r":\s*(string|number|boolean|object|any|void|never|unknown|Record|Array<|Promise<)")
                .unwrap()
        });
        let re_decl = RE_TS_DECL
            .get_or_init(|| Regex::new(r"interface\s+\w+|type\s+\w+\s*=|enum\s+\w+").unwrap());
        if re_annotation.is_match(trimmed) || re_decl.is_match(trimmed) {
            return Detection::of(ContentKind::Typescript);
        }
        return Detection::of(ContentKind::Javascript);
    }

    let re_python = RE_PYTHON.get_or_init(|| {
        vec![
            Regex::new(r"(?m)^(def|class|import|from|if|elif|else|for|while|try|except|with|async|await)\s+")
                .unwrap(),
            // Trailing colon: a Python-style block opener
            Regex::new(r"(?m):\s*$").unwrap(),
            Regex::new(r"print\s*\(").unwrap(),
            Regex::new(r#"__name__\s*==\s*['"]__main__['"]"#).unwrap(),
        ]
    });
    if re_python.iter().any(|re| re.is_match(trimmed)) {
        return Detection::of(ContentKind::Python);
    }

    // CSS: brace block with colon-terminated declarations, not JS-looking,
    // and a selector-like prefix before the first brace
    let re_css_shape = RE_CSS_SHAPE.get_or_init(|| Regex::new(r"(?s)\{.*:.*;.*\}").unwrap());
    if re_css_shape.is_match(trimmed)
        && !trimmed.contains("function")
        && !trimmed.contains("=>")
    {
        let re_selector =
            RE_CSS_SELECTOR.get_or_init(|| Regex::new(r"^[\w\s.#:,\[\]()-]+$").unwrap());
        let prefix = trimmed.split('{').next().unwrap_or("");
        if !prefix.trim().is_empty() && re_selector.is_match(prefix) {
            return Detection::of(ContentKind::Css);
        }
    }

    let re_yaml =
        RE_YAML.get_or_init(|| Regex::new(r"(?m)^\s*(---|[\w-]+:\s|\s+-\s+)").unwrap());
    if re_yaml.is_match(trimmed) {
        return Detection::of(ContentKind::Yaml);
    }

    let re_markdown = RE_MARKDOWN.get_or_init(|| {
        vec![
            Regex::new(r"^#{1,6}\s+").unwrap(),
            Regex::new(r"(?s)^\*\*.+\*\*").unwrap(),
            Regex::new(r"^\s*[-*+]\s+").unwrap(),
        ]
    });
    if re_markdown.iter().any(|re| re.is_match(trimmed)) {
        return Detection::of(ContentKind::Markdown);
    }

    let re_shell = RE_SHELL.get_or_init(|| {
        vec![
            Regex::new(r"^#!/bin/(bash|sh)").unwrap(),
            Regex::new(r"^\$\s").unwrap(),
            Regex::new(r"^(cd|ls|grep|awk|sed|curl|wget)\s+").unwrap(),
        ]
    });
    if re_shell.iter().any(|re| re.is_match(trimmed)) {
        return Detection::of(ContentKind::Shell);
    }

    Detection::of(ContentKind::Text)
}
