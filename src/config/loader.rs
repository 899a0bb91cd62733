//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::GreetingsConfig;
use crate::config::secret_string;
use crate::domain::errors::GreetingsError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into [`GreetingsConfig`]
/// 4. Applies environment variable overrides (GREETINGS_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`GreetingsError::Configuration`] if any of the steps above fails.
///
/// # Examples
///
/// ```no_run
/// use greetings::config::loader::load_config;
///
/// let config = load_config("greetings.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GreetingsConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GreetingsError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        GreetingsError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Applies the same substitution, override and validation steps as
/// [`load_config`].
pub fn parse_config(contents: &str) -> Result<GreetingsConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: GreetingsConfig = toml::from_str(&contents)
        .map_err(|e| GreetingsError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        GreetingsError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| GreetingsError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(GreetingsError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using GREETINGS_* prefix
///
/// Environment variables follow the pattern: GREETINGS_<SECTION>_<KEY>
fn apply_env_overrides(config: &mut GreetingsConfig) -> Result<()> {
    if let Ok(val) = std::env::var("GREETINGS_DATABASE_TARGET") {
        config.database_target = val.parse().map_err(GreetingsError::Configuration)?;
    }

    if let Ok(val) = std::env::var("GREETINGS_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("GREETINGS_SERVER_BIND_ADDRESS") {
        config.server.bind_address = val;
    }

    // PostgreSQL overrides (only if the section is present)
    if let Some(ref mut pg_config) = config.postgresql {
        if let Ok(val) = std::env::var("GREETINGS_POSTGRESQL_CONNECTION_STRING") {
            pg_config.connection_string = secret_string(val);
        }
        if let Ok(val) = std::env::var("GREETINGS_POSTGRESQL_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                pg_config.max_connections = max;
            }
        }
    }

    if let Ok(val) = std::env::var("GREETINGS_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("GREETINGS_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DatabaseTarget;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("GREETINGS_LOADER_TEST_VAR", "test_value");
        let input = "password = \"${GREETINGS_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "password = \"test_value\"\n");
        std::env::remove_var("GREETINGS_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("GREETINGS_LOADER_MISSING_VAR");
        let input = "password = \"${GREETINGS_LOADER_MISSING_VAR}\"";
        let err = substitute_env_vars(input).unwrap_err();
        assert!(err.to_string().contains("GREETINGS_LOADER_MISSING_VAR"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("GREETINGS_LOADER_COMMENTED_VAR");
        let input = "# url = \"${GREETINGS_LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent.toml");
        assert!(matches!(result, Err(GreetingsError::Configuration(_))));
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
database_target = "memory"

[application]
log_level = "debug"

[server]
bind_address = "127.0.0.1:9000"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.database_target, DatabaseTarget::Memory);
        assert_eq!(config.application.log_level, "debug");
        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert!(config.postgresql.is_none());
    }

    #[test]
    fn test_parse_config_rejects_invalid() {
        let result = parse_config("database_target = \"postgresql\"\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }
}
