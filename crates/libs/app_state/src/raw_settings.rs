use serde::Deserialize;

/// Settings as they appear in `config/settings.yaml`, before validation.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub logging: RawLoggingSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RawLoggingSettings {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

/// How mapped DTOs are written out.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OutputSettings {
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
}
