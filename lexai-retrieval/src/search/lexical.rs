//! Lexical search adapter.

use lexai_core::config::LexicalIndexConfig;
use lexai_core::errors::LexaiResult;
use lexai_core::models::{CitationClause, Hit, HitSource, LexicalQuery};
use lexai_core::traits::ILexicalIndex;
use tracing::debug;

use crate::citation::CitationDetector;
use crate::passage::PassageMaterializer;

/// Builds the boosted multi-field query and normalizes the index's answer.
pub struct LexicalSearcher<'a> {
    index: &'a dyn ILexicalIndex,
    config: &'a LexicalIndexConfig,
    passages: &'a PassageMaterializer,
}

impl<'a> LexicalSearcher<'a> {
    pub fn new(
        index: &'a dyn ILexicalIndex,
        config: &'a LexicalIndexConfig,
        passages: &'a PassageMaterializer,
    ) -> Self {
        Self {
            index,
            config,
            passages,
        }
    }

    /// Query for `text`; the citation clause is present only when `tags` is
    /// non-empty.
    pub fn build_query(&self, text: &str, tags: &[String], top_k: usize) -> LexicalQuery {
        let citation = (!tags.is_empty()).then(|| CitationClause {
            field: self.config.citation_field.clone(),
            terms: tags.to_vec(),
            boost: self.config.citation_boost,
        });
        LexicalQuery {
            text: text.to_string(),
            fields: self.config.fields.clone(),
            operator: self.config.operator.clone(),
            citation,
            size: top_k,
        }
    }

    /// Search with citation tags already detected by the caller.
    pub fn search_with_tags(&self, query: &str, tags: &[String], top_k: usize) -> LexaiResult<Vec<Hit>> {
        super::check_top_k(top_k)?;
        let raw = self.index.search(&self.build_query(query, tags, top_k))?;
        let hits = super::into_hits(raw, HitSource::Lexical, self.passages);
        debug!(backend = self.index.name(), hits = hits.len(), "lexical search complete");
        Ok(hits)
    }

    /// Search, detecting citation tags from the query itself.
    pub fn search(&self, query: &str, top_k: usize) -> LexaiResult<Vec<Hit>> {
        let tags = CitationDetector::new().detect(query);
        self.search_with_tags(query, &tags, top_k)
    }
}
