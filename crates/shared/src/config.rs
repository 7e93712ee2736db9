use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::constants::{DEFAULT_DELAY_MS, DEFAULT_OFFSET_PX};
use crate::error::ConfigError;

/// Which side of the trigger the tooltip prefers to open on. This is only a
/// hint, the popover does no collision handling.
#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TooltipSettings {
    /// Milliseconds the pointer has to rest on a trigger before the tooltip
    /// is shown.
    pub delay_ms: u32,
    /// Preferred side of the trigger.
    pub placement: Placement,
    /// Gap in pixels between the trigger and the tooltip.
    pub offset: u32,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            placement: Placement::default(),
            offset: DEFAULT_OFFSET_PX,
        }
    }
}

impl TooltipSettings {
    pub fn from_ron(raw: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(raw)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, Default::default())?)
    }

    /// Parse settings, falling back to the defaults if they're malformed.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_ron(raw) {
            Ok(settings) => {
                log::info!("Loaded tooltip settings: {:?}", settings);
                settings
            }
            Err(err) => {
                log::error!("Unable to load tooltip settings: {}", err);
                Self::default()
            }
        }
    }
}
