use serde::{Deserialize, Serialize};

/// Binary classification outcome for one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Safe,
    Phishing,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Phishing => "phishing",
        }
    }

    /// The label encoding the model was trained with: 1 = phishing, 0 = safe.
    pub const fn label(self) -> u8 {
        match self {
            Self::Safe => 0,
            Self::Phishing => 1,
        }
    }

    pub const fn from_label(label: u8) -> Self {
        match label {
            1 => Self::Phishing,
            _ => Self::Safe,
        }
    }
}
