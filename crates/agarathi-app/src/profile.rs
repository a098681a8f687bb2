use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use agarathi_config::Config;
use anyhow::Context;

/// Load config from a JSON file, or from the environment when no file is given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No config file, using environment defaults");
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut config: Config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    // Keep the key out of the file when possible
    if config.illustration.api_key.is_empty() {
        if let Ok(key) = env::var("IMAGE_API_KEY") {
            config.illustration.api_key = key;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use agarathi_config::ProviderKind;

    use super::*;

    #[test]
    fn file_values_are_loaded() {
        let path = env::temp_dir().join(format!("agarathi-profile-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{ "source": {{ "provider": "extract", "language": "ta" }}, "timeout_seconds": 5 }}"#
        )
        .unwrap();
        drop(file);

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.source.provider, ProviderKind::Extract);
        assert_eq!(config.source.language(), "ta");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = env::temp_dir().join("agarathi-profile-does-not-exist.json");
        assert!(load_config(Some(&path)).is_err());
    }
}
