// file: src/classifier/mod.rs
// description: entity recognizer boundary consumed by the extractor
// reference: internal module structure

pub mod model;

pub use model::NerModel;

/// A labeled span produced by the recognizer. Only the literal substring
/// and its label survive; offsets are not retained past extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub label: String,
    pub value: String,
}

impl Detection {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Narrow interface over the statistical recognizer so the extraction and
/// cleanup logic can be tested against a stub. Classification is
/// infallible; a recognizer that cannot be constructed fails at load time,
/// once, not per call.
pub trait EntityClassifier {
    fn classify(&self, text: &str) -> Vec<Detection>;
}
