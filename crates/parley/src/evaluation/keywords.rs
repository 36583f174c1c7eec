//! Expected-keyword derivation for a question.
//!
//! A question maps to the keyword list of the first topic entry whose tokens
//! all occur in the question text. Token matching (rather than whole-key
//! substring matching) lets "let const var" hit the question "What is the
//! difference between let, const, and var in JavaScript?".

/// Topic table, first match wins. Order matters: earlier entries shadow
/// later ones when a question mentions several topics.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("let const var", &["let", "const", "var", "variable", "declaration"]),
    ("closures", &["closure", "scope", "lexical", "function", "context"]),
    ("jsx", &["jsx", "javascript", "xml", "syntax", "react"]),
    ("state", &["state", "setstate", "update", "component", "data"]),
    ("props", &["props", "properties", "attributes", "passing", "data"]),
    ("nodejs", &["node.js", "server", "runtime", "javascript", "backend"]),
    ("express", &["express", "framework", "middleware", "routing", "server"]),
    ("react", &["react", "component", "virtual dom", "lifecycle", "hooks"]),
    ("database", &["database", "sql", "nosql", "connection", "query"]),
    ("api", &["api", "rest", "endpoint", "http", "request", "response"]),
];

/// Keyword set used when no topic entry matches the question.
const DEFAULT_KEYWORDS: &[&str] = &["technical", "development", "programming", "software"];

/// Returns the expected-keyword set for a question.
pub fn expected_keywords(question: &str) -> &'static [&'static str] {
    let question_lower = question.to_lowercase();

    for (topic, keywords) in TOPIC_KEYWORDS {
        let all_tokens_present = topic
            .split_whitespace()
            .all(|token| question_lower.contains(token));
        if all_tokens_present {
            return keywords;
        }
    }

    DEFAULT_KEYWORDS
}
