//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, TitlesConfig};
use crate::domain::error::ConfigError;
use crate::domain::notification::Urgency;
use crate::domain::protocol::ProtocolVariant;
use crate::infrastructure::terminal::OutputTarget;

use super::app::parse_bool;
use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::{not_set, Presenter};

/// Handle config subcommand
pub fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter),
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value),
        ConfigAction::Get { key } => handle_get(store, presenter, &key),
        ConfigAction::List => handle_list(store, presenter),
        ConfigAction::Path => handle_path(store, presenter),
    }
}

fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init()?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load()?;
    set_value(&mut config, key, value)?;

    store.save(&config)?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load()?;

    match get_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load()?;

    for key in VALID_CONFIG_KEYS {
        let value = get_value(&config, key).unwrap_or_else(not_set);
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(unknown_key(key))
    }
}

fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let value = value.to_string();
    match key {
        "default_title" => config.default_title = Some(value),
        "force_protocol" => config.force_protocol = Some(value.to_lowercase()),
        "enable_fallback" => config.enable_fallback = Some(bool_value(key, &value)?),
        "default_urgency" => config.default_urgency = Some(value.to_lowercase()),
        "app_name" => config.app_name = Some(value),
        "output" => config.output = Some(value.to_lowercase()),
        "titles.success" => titles_mut(config).success = Some(value),
        "titles.failure" => titles_mut(config).failure = Some(value),
        "titles.error" => titles_mut(config).error = Some(value),
        "titles.warning" => titles_mut(config).warning = Some(value),
        "titles.info" => titles_mut(config).info = Some(value),
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn get_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "default_title" => config.default_title.clone(),
        "force_protocol" => config.force_protocol.clone(),
        "enable_fallback" => config.enable_fallback.map(|b| b.to_string()),
        "default_urgency" => config.default_urgency.clone(),
        "app_name" => config.app_name.clone(),
        "output" => config.output.clone(),
        "titles.success" => config.titles.as_ref().and_then(|t| t.success.clone()),
        "titles.failure" => config.titles.as_ref().and_then(|t| t.failure.clone()),
        "titles.error" => config.titles.as_ref().and_then(|t| t.error.clone()),
        "titles.warning" => config.titles.as_ref().and_then(|t| t.warning.clone()),
        "titles.info" => config.titles.as_ref().and_then(|t| t.info.clone()),
        _ => None,
    }
}

fn titles_mut(config: &mut AppConfig) -> &mut TitlesConfig {
    config.titles.get_or_insert_with(TitlesConfig::default)
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

fn bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "force_protocol" => {
            value
                .parse::<ProtocolVariant>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "default_urgency" => {
            value
                .parse::<Urgency>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "enable_fallback" => {
            bool_value(key, value)?;
        }
        "output" => {
            value.parse::<OutputTarget>()?;
        }
        _ => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn validate_protocol() {
        assert!(validate_config_value("force_protocol", "osc99").is_ok());
        assert!(validate_config_value("force_protocol", "NONE").is_ok());
        assert!(validate_config_value("force_protocol", "osc1").is_err());
    }

    #[test]
    fn validate_urgency() {
        assert!(validate_config_value("default_urgency", "critical").is_ok());
        assert!(validate_config_value("default_urgency", "urgent").is_err());
    }

    #[test]
    fn validate_fallback_and_output() {
        assert!(validate_config_value("enable_fallback", "yes").is_ok());
        assert!(validate_config_value("enable_fallback", "maybe").is_err());
        assert!(validate_config_value("output", "stderr").is_ok());
        assert!(validate_config_value("output", "printer").is_err());
    }

    #[test]
    fn validate_free_text_not_empty() {
        assert!(validate_config_value("default_title", "CI").is_ok());
        assert!(validate_config_value("titles.failure", " ").is_err());
    }

    #[test]
    fn set_then_get_round_trip_through_file() {
        let (_dir, store) = store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "titles.failure", "Broken").unwrap();
        handle_set(&store, &presenter, "enable_fallback", "no").unwrap();
        handle_set(&store, &presenter, "force_protocol", "OSC777").unwrap();

        let config = store.load().unwrap();
        assert_eq!(get_value(&config, "titles.failure"), Some("Broken".to_string()));
        assert_eq!(get_value(&config, "titles.success"), None);
        assert_eq!(config.enable_fallback, Some(false));
        assert_eq!(config.force_protocol, Some("osc777".to_string()));
    }

    #[test]
    fn set_rejects_unknown_key() {
        let (_dir, store) = store();
        let err = handle_set(&store, &Presenter::new(), "api_key", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
        assert!(!store.exists());
    }

    #[test]
    fn every_key_is_settable() {
        let mut config = AppConfig::empty();
        for key in VALID_CONFIG_KEYS {
            let value = match *key {
                "force_protocol" => "osc9",
                "enable_fallback" => "true",
                "default_urgency" => "low",
                "output" => "stdout",
                _ => "value",
            };
            set_value(&mut config, key, value).unwrap();
            assert!(get_value(&config, key).is_some(), "{}", key);
        }
    }
}
