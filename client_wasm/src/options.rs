//! Page-supplied simulation options

use pulley_core::{ConfigError, PulleyConfig};
use serde::Deserialize;

/// Options object passed from JS as JSON. Every key is optional, e.g.
/// `{"targetLength": 650, "massA": 12, "anchor": [400, 120], "seed": 7}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimOptions {
    #[serde(flatten)]
    pub scene: PulleyConfig,
    /// Scatter the bodies from this seed instead of using the start positions
    pub seed: Option<u64>,
}

impl SimOptions {
    /// Parse and validate; an absent or blank string means defaults
    pub fn from_json(json: Option<&str>) -> Result<Self, ConfigError> {
        let options = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(text) => {
                serde_json::from_str(text).map_err(|e| ConfigError::Options(e.to_string()))?
            }
        };
        options.scene.validate()?;
        Ok(options)
    }
}
