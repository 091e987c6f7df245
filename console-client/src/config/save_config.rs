use common::config::Validate;
use common::save::SAVE_FILE_NAME;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SaveConfig {
    pub autosave: bool,
    pub location: String,
}

impl Validate for SaveConfig {
    fn validate(&self) -> Result<(), String> {
        if self.location.trim().is_empty() {
            return Err("save location must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            autosave: true,
            location: SAVE_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_save_config_is_valid() {
        let config = SaveConfig::default();
        assert!(config.autosave);
        assert_eq!(config.location, "tictactoe_save.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_location_is_rejected() {
        let config = SaveConfig {
            autosave: true,
            location: "  ".to_string(),
        };
        assert!(config.validate().is_err());
    }
}
