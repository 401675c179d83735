use crate::constants::FEATURE_NAMES;
use crate::features::UrlFeatures;
use crate::math::{dot, sigmoid};
use crate::model::{ModelError, UrlModel};
use crate::types::Verdict;

/// The inference engine. Stateless — call `classify()` per URL.
#[derive(Debug, Clone)]
pub struct ScanEngine {
    model: UrlModel,
}

/// Result of classifying a single URL.
#[derive(Debug, Clone)]
pub struct Prediction {
    /// Probability score in [0, 1].
    pub score: f64,
    /// Binary verdict: score ≥ threshold → phishing.
    pub verdict: Verdict,
    /// Top contributing features (for explainability).
    pub top_features: Vec<(String, f64)>,
}

impl ScanEngine {
    /// Create engine with the built-in default model.
    pub fn new() -> Self {
        Self {
            model: UrlModel::default(),
        }
    }

    /// Create engine with a specific model.
    pub fn with_model(model: UrlModel) -> Self {
        Self { model }
    }

    /// Swap in new model weights after validating them.
    pub fn reload_model(&mut self, model: UrlModel) -> Result<(), ModelError> {
        model.validate()?;
        self.model = model;
        Ok(())
    }

    pub fn model_id(&self) -> &str {
        &self.model.model_id
    }

    pub fn model_version(&self) -> &str {
        &self.model.model_version
    }

    pub fn threshold(&self) -> f64 {
        self.model.threshold
    }

    pub fn weight_count(&self) -> usize {
        self.model.weights.len()
    }

    /// Classify one feature vector.
    pub fn classify(&self, features: &UrlFeatures) -> Prediction {
        // Linear combination: z = w · x + b
        let z = dot(&self.model.weights, &features.values) + self.model.bias;

        // Logistic sigmoid: σ(z) = 1 / (1 + e^(-z))
        let score = sigmoid(z);
        let verdict = if score >= self.model.threshold {
            Verdict::Phishing
        } else {
            Verdict::Safe
        };

        // Top contributing features (for audit trail / explainability)
        let mut contributions: Vec<(String, f64)> = FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let contribution = self.model.weights[i] * features.values[i];
                (name.to_string(), contribution)
            })
            .filter(|(_, c)| c.abs() > 0.01)
            .collect();
        contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        contributions.truncate(5);

        Prediction {
            score,
            verdict,
            top_features: contributions,
        }
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::new()
    }
}
