use std::env;
use std::path::PathBuf;

/// Relative path the pretrained artifact is expected at.
pub const DEFAULT_MODEL_PATH: &str = "model/model.json";

/// Environment override for the artifact path.
pub const MODEL_PATH_ENV: &str = "URLGUARD_MODEL";

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub model_path: PathBuf,
    pub verbose: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            verbose: false,
        }
    }
}

impl ScanConfig {
    /// Defaults, then environment, then CLI flags — later layers win.
    pub fn load(cli_model: Option<PathBuf>, verbose: bool) -> Self {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        if let Some(path) = cli_model {
            cfg.model_path = path;
        }
        cfg.verbose = verbose;
        cfg
    }

    fn apply_env_overrides(&mut self) {
        if let Some(path) = env_non_empty(MODEL_PATH_ENV) {
            self.model_path = PathBuf::from(path);
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}
