use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::FirstPlayerMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::SaveConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `override_path` when given, otherwise the config file next to the executable.
pub fn get_config_manager(
    override_path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(override_path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub save: SaveConfig,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.save.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_console_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialize_result = serializer.serialize(&default_config);
        assert!(serialize_result.is_ok());
        let serialized_string = serialize_result.unwrap();
        let deserialize_result = serializer.deserialize(&serialized_string);
        assert!(deserialize_result.is_ok());
        let deserialized_config = deserialize_result.unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let write_result = content_provider.set_config_content(&serialized_string);
        assert!(write_result.is_ok());

        let read_result = content_provider.get_config_content();
        assert!(read_result.is_ok());
        let read_string = read_result.unwrap().unwrap();

        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_manager() {
        let config = Config {
            save: SaveConfig {
                autosave: false,
                location: "elsewhere.txt".to_string(),
            },
            first_player: FirstPlayerMode::PlayerOne,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(PathBuf::from(&file_path)));
        assert_eq!(manager.source(), file_path);

        let save_result = manager.set_config(&config);
        assert!(save_result.is_ok());

        let loaded_config = manager.get_config().unwrap();
        assert_eq!(config, loaded_config);

        let loaded_config_again = manager.get_config().unwrap();
        assert_eq!(config, loaded_config_again);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let serializer = YamlConfigSerializer::new();

        let file_path = "this_file_does_not_exist.yaml".to_string();
        let content_provider = FileContentConfigProvider::new(file_path);
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(content_provider, serializer);
        let get_result = manager.get_config();
        assert!(get_result.is_ok());
        assert_eq!(Config::default(), get_result.unwrap());
    }

    #[test]
    fn test_missing_first_player_defaults_to_random() {
        let content = "save:\n  autosave: true\n  location: game.txt\n";
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer.deserialize(content).unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Random);
        assert_eq!(config.save.location, "game.txt");
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_contents = [
            r#"
            save:
              # location is missing
              autosave: true
            "#,
            r#"
            save:
              autosave: true
              location: ""
            "#,
            r#"
            save:
              autosave: true
              location: game.txt
            first_player: Sideways
            "#,
        ];

        for invalid_config_content in invalid_config_contents {
            let file_path = get_temp_file_path();
            let content_provider = FileContentConfigProvider::new(file_path.clone());
            content_provider
                .set_config_content(invalid_config_content)
                .unwrap();

            let serializer = YamlConfigSerializer::new();
            let manager: ConfigManager<_, Config, _> =
                ConfigManager::new(content_provider, serializer);
            let get_result = manager.get_config();
            assert!(get_result.is_err(), "accepted {:?}", invalid_config_content);

            let _ = std::fs::remove_file(file_path);
        }
    }
}
