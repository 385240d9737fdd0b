use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;

pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.yaml";

/// Load the app settings from `config/settings.yaml` + environment variables.
pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv so `.env` entries can overwrite the yaml values.
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new(DEFAULT_SETTINGS_PATH))
}

/// Load the app settings from a yaml file, overlaid with `APP__SECTION__KEY` environment variables.
pub fn load_app_settings_from(config_path: &Path) -> Result<AppSettings> {
    let config_path = config_path.canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tracing::Level;

    #[test]
    fn loads_yaml_settings() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "logging:\n  level: debug\noutput:\n  pretty: true\n")?;

        let settings = load_app_settings_from(&path)?;
        assert_eq!(settings.logging.level, Level::DEBUG);
        assert!(settings.output.pretty);
        Ok(())
    }

    #[test]
    fn output_section_is_optional() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "logging:\n  level: warn\n")?;

        let settings = load_app_settings_from(&path)?;
        assert_eq!(settings.logging.level, Level::WARN);
        assert!(!settings.output.pretty);
        Ok(())
    }

    #[test]
    fn rejects_unknown_level() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "logging:\n  level: loud\n")?;

        assert!(load_app_settings_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_app_settings_from(Path::new("does/not/exist.yaml")).is_err());
    }
}
