// file: src/classifier/model.rs
// description: pretrained NER model loaded from disk, scored over whitespace tokens
// reference: model file produced by the external training pipeline

use crate::classifier::{Detection, EntityClassifier};
use crate::error::{HunterError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const SUPPORTED_VERSION: u32 = 1;

/// Characters stripped from token edges before lookup. The emitted value is
/// the stripped token, matching how the training data was tokenized.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '<', '>',
];

#[derive(Debug, Deserialize)]
struct ModelFile {
    version: u32,
    labels: Vec<String>,
    /// Exact-token vocabulary: token -> label -> learned weight.
    vocab: HashMap<String, HashMap<String, f64>>,
    /// Context cues: a lowercased word that boosts the token following it.
    #[serde(default)]
    cues: HashMap<String, Cue>,
    #[serde(default = "default_threshold")]
    threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct Cue {
    label: String,
    weight: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// The production recognizer. Loaded once at process start and read-only
/// afterwards; repeated sequential classification is safe.
#[derive(Debug)]
pub struct NerModel {
    labels: Vec<String>,
    vocab: HashMap<String, HashMap<String, f64>>,
    cues: HashMap<String, Cue>,
    threshold: f64,
}

impl NerModel {
    /// Deserialize the model file. Any failure here is fatal for the
    /// process: the extractor cannot run without its classifier.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| HunterError::Model {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let file: ModelFile = serde_json::from_str(&raw).map_err(|e| HunterError::Model {
            path: path.to_path_buf(),
            message: format!("invalid model file: {}", e),
        })?;

        if file.version != SUPPORTED_VERSION {
            return Err(HunterError::Model {
                path: path.to_path_buf(),
                message: format!(
                    "unsupported model version {} (expected {})",
                    file.version, SUPPORTED_VERSION
                ),
            });
        }

        if file.labels.is_empty() {
            return Err(HunterError::Model {
                path: path.to_path_buf(),
                message: "model declares no labels".to_string(),
            });
        }

        info!(
            "Loaded NER model from {} ({} labels, {} vocabulary entries)",
            path.display(),
            file.labels.len(),
            file.vocab.len()
        );

        Ok(Self {
            labels: file.labels,
            vocab: file.vocab,
            cues: file.cues,
            threshold: file.threshold,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn score_token(&self, token: &str, previous: Option<&str>) -> Option<(String, f64)> {
        let mut scores: HashMap<&str, f64> = HashMap::new();

        if let Some(weights) = self.vocab.get(token) {
            for (label, weight) in weights {
                *scores.entry(label.as_str()).or_default() += weight;
            }
        }

        if let Some(prev) = previous
            && let Some(cue) = self.cues.get(&prev.to_lowercase())
        {
            *scores.entry(cue.label.as_str()).or_default() += cue.weight;
        }

        scores
            .into_iter()
            .filter(|(_, score)| *score >= self.threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(label, score)| (label.to_string(), score))
    }
}

impl EntityClassifier for NerModel {
    fn classify(&self, text: &str) -> Vec<Detection> {
        let mut detections = Vec::new();
        let mut previous: Option<&str> = None;

        for word in text.split_whitespace() {
            let token = word.trim_matches(EDGE_PUNCTUATION);
            if token.is_empty() {
                previous = None;
                continue;
            }

            if let Some((label, score)) = self.score_token(token, previous) {
                debug!("Model detection: {} -> {} ({:.2})", token, label, score);
                detections.push(Detection::new(label, token));
            }

            previous = Some(token);
        }

        detections
    }
}
