pub mod aliases;
pub mod detector;

pub use detector::CitationDetector;
