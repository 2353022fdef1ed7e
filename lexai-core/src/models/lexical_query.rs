use serde::{Deserialize, Serialize};

use crate::config::FieldBoost;

/// Boosted exact-match clause toward documents citing the detected statutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationClause {
    pub field: String,
    pub terms: Vec<String>,
    pub boost: f64,
}

/// Structured multi-field keyword query handed to an [`ILexicalIndex`].
///
/// [`ILexicalIndex`]: crate::traits::ILexicalIndex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalQuery {
    pub text: String,
    pub fields: Vec<FieldBoost>,
    pub operator: String,
    pub citation: Option<CitationClause>,
    pub size: usize,
}
