mod degradation_event;
mod hit;
mod lexical_query;
mod passage;
mod payload;
mod raw_hit;

pub use degradation_event::DegradationEvent;
pub use hit::{Hit, HitSource};
pub use lexical_query::{CitationClause, LexicalQuery};
pub use passage::Passage;
pub use payload::CasePayload;
pub use raw_hit::RawHit;
