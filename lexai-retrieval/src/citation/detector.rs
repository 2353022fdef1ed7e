//! Citation detection over free-text queries.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::aliases::{alias_pattern, fold_key, STATUTE_ALIASES, STATUTE_NUMBERS};

/// Folded alias → canonical code.
static ALIAS_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    STATUTE_ALIASES
        .iter()
        .flat_map(|(code, aliases)| aliases.iter().map(move |a| (fold_key(a), *code)))
        .collect()
});

static NUMBER_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATUTE_NUMBERS.iter().copied().collect());

/// `None` only if the generated pattern fails to compile; detection then
/// reports no citations.
static CITATION_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(&build_pattern()).ok());

fn build_pattern() -> String {
    let mut aliases: Vec<&str> = STATUTE_ALIASES
        .iter()
        .flat_map(|(_, aliases)| aliases.iter().copied())
        .collect();
    // Longest first so "KABAHATLER KANUNU" wins over "KABAHATLER".
    aliases.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));
    let names = aliases
        .iter()
        .map(|a| alias_pattern(a))
        .collect::<Vec<_>>()
        .join("|");

    let sayili = alias_pattern("sayılı");
    let kanun = alias_pattern("kanun");
    format!(
        r"(?i)\b(?:(?P<num>\d{{4}})\s+{sayili}(?:\s+(?:{names}))?(?:\s+{kanun}(?:un|u)?)?|(?P<code>{names}))\b(?:['’]\p{{L}}+)?(?:\s*(?:maddes[iİı]|madde|md\.?|m\.)?\s*(?P<art>\d{{1,4}})\b\.?(?:\s*/\s*(?P<par>\d{{1,3}})\b)?)?"
    )
}

/// Finds statute citations in a query and renders them as normalized tags:
/// `CODE`, `CODE ART` or `CODE ART/PAR`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CitationDetector;

impl CitationDetector {
    pub fn new() -> Self {
        Self
    }

    /// Deduplicated, order-preserving citation tags. Unknown law numbers are
    /// dropped.
    pub fn detect(&self, query: &str) -> Vec<String> {
        let Some(re) = CITATION_RE.as_ref() else {
            return Vec::new();
        };

        let mut tags: Vec<String> = Vec::new();
        for caps in re.captures_iter(query) {
            let code = if let Some(num) = caps.name("num") {
                NUMBER_INDEX.get(num.as_str()).copied()
            } else {
                caps.name("code")
                    .and_then(|m| ALIAS_INDEX.get(&fold_key(m.as_str())).copied())
            };
            let Some(code) = code else {
                continue;
            };

            let article = caps.name("art").and_then(|m| m.as_str().parse::<u32>().ok());
            let paragraph = caps.name("par").and_then(|m| m.as_str().parse::<u32>().ok());
            let tag = match (article, paragraph) {
                (Some(a), Some(p)) => format!("{code} {a}/{p}"),
                (Some(a), None) => format!("{code} {a}"),
                _ => code.to_string(),
            };
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}
