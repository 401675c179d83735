use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};

/// Serializable model weights — loaded from a JSON artifact at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlModel {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the model format.
    pub model_version: String,
    /// Weight vector (length = FEATURE_COUNT).
    pub weights: Vec<f64>,
    /// Bias (intercept) term.
    pub bias: f64,
    /// Decision threshold: score ≥ threshold → phishing.
    pub threshold: f64,
    /// Feature names (for validation; must match FEATURE_NAMES order).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

/// Offline-trained export format. Uses a named weight map plus per-feature
/// scales instead of a positional array: the trainer normalizes each raw
/// feature as `value / scale` before the weight applies.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainedExport {
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub model_type: String,
    pub model_version: String,
    pub features: Vec<String>,
    pub weights: HashMap<String, f64>,
    #[serde(default)]
    pub feature_scales: HashMap<String, f64>,
    pub bias: f64,
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl TrainedExport {
    /// Load from the JSON the offline training pipeline emits.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::ParseJson)
    }

    /// Convert the export to a runtime `UrlModel`.
    ///
    /// Maps named weights to positional slots using `FEATURE_NAMES`.
    /// Exported features that don't exist in `FEATURE_NAMES` are dropped.
    /// Features in `FEATURE_NAMES` absent from the export get weight 0.0.
    ///
    /// Runtime features are raw counts, so the export's normalization is
    /// folded into the weight: `runtime_weight = export_weight / scale`.
    pub fn to_runtime_model(&self) -> UrlModel {
        let mut weights = vec![0.0f64; FEATURE_COUNT];
        for (i, name) in FEATURE_NAMES.iter().enumerate() {
            if let Some(&w) = self.weights.get(*name) {
                let scale = self
                    .feature_scales
                    .get(*name)
                    .copied()
                    .unwrap_or(1.0)
                    .max(1e-10);
                weights[i] = w / scale;
            }
        }

        let threshold = match self.threshold {
            Some(t) if (0.0..=1.0).contains(&t) => t,
            _ => 0.5,
        };

        UrlModel {
            model_id: format!("trained-{}", self.model_version),
            model_version: self.model_version.clone(),
            weights,
            bias: self.bias,
            threshold,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl UrlModel {
    /// Load from JSON, auto-detecting the trained-export vs native format.
    pub fn from_json_auto(json: &str) -> Result<Self, ModelError> {
        // The export format is the only one carrying a feature_scales map.
        if json.contains("\"feature_scales\"") {
            if let Ok(export) = TrainedExport::from_json(json) {
                let model = export.to_runtime_model();
                model.validate()?;
                return Ok(model);
            }
        }
        Self::from_json(json)
    }

    /// Validate that the model is structurally sound.
    ///
    /// The feature vector shape is an implicit contract with the trainer; a
    /// mismatch here is a load-time error rather than a silent misprediction.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(ModelError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: self.weights.len(),
            });
        }
        if self.threshold < 0.0 || self.threshold > 1.0 {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        if !self.feature_names.is_empty() {
            if self.feature_names.len() != FEATURE_COUNT {
                return Err(ModelError::DimensionMismatch {
                    expected: FEATURE_COUNT,
                    got: self.feature_names.len(),
                });
            }
            for (i, name) in self.feature_names.iter().enumerate() {
                if name.as_str() != FEATURE_NAMES[i] {
                    return Err(ModelError::FeatureNameMismatch {
                        index: i,
                        expected: FEATURE_NAMES[i],
                        got: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Load model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    /// Load model from a JSON file path, auto-detecting the format.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        Self::from_json_auto(&content)
    }
}

/// Hand-tuned default weights — the source of the checked-in artifact.
/// These approximate: "an IP literal, an '@' or a shortener domain is very
/// suspicious on its own; length and depth accumulate slowly; the placeholder
/// features carry no information and get zero weight."
impl Default for UrlModel {
    fn default() -> Self {
        Self {
            model_id: "urlguard-default-v1".to_string(),
            model_version: "1.0.0".to_string(),
            weights: vec![
                2.5,  // have_ip          — raw IP host is a strong signal
                2.0,  // have_at          — '@' hides the real host
                0.02, // url_length       — per character
                0.15, // url_depth        — per '/'
                1.5,  // redirection      — embedded '//'
                1.8,  // https_in_domain  — "https" used as a token past the scheme
                2.2,  // shortener        — redirect services mask the target
                0.8,  // prefix_suffix    — hyphenated look-alike domains
                0.0,  // dns_record       — placeholder, no information
                0.0,  // web_traffic      — placeholder
                0.0,  // domain_age       — placeholder
                0.0,  // domain_end       — placeholder
                1.5,  // iframe           — injection token in the URL
                0.0,  // mouse_over       — placeholder
                0.0,  // right_click      — placeholder
                1.2,  // web_forwards     — chained '//'
            ],
            bias: -2.6,
            threshold: 0.5,
            feature_names: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug)]
pub enum ModelError {
    DimensionMismatch {
        expected: usize,
        got: usize,
    },
    InvalidThreshold(f64),
    NonFiniteWeight {
        index: usize,
        value: f64,
    },
    NonFiniteBias(f64),
    FeatureNameMismatch {
        index: usize,
        expected: &'static str,
        got: String,
    },
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(
                    f,
                    "weight dimension mismatch: expected {expected}, got {got}"
                )
            }
            Self::InvalidThreshold(t) => write!(f, "threshold {t} not in [0, 1]"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::FeatureNameMismatch {
                index,
                expected,
                got,
            } => {
                write!(
                    f,
                    "feature name mismatch at index {index}: expected {expected}, got {got}"
                )
            }
            Self::ParseJson(e) => write!(f, "model JSON parse error: {e}"),
            Self::Io(e) => write!(f, "model file IO error: {e}"),
        }
    }
}

impl std::error::Error for ModelError {}
