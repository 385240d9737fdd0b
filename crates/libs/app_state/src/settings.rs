use crate::{OutputSettings, RawSettings};
use color_eyre::eyre::{Report, eyre};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: Level,
}

impl TryFrom<RawSettings> for AppSettings {
    type Error = Report;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let level = raw
            .logging
            .level
            .trim()
            .parse::<Level>()
            .map_err(|_| eyre!("Invalid logging level: {}", raw.logging.level))?;

        Ok(Self {
            logging: LoggingSettings { level },
            output: raw.output,
        })
    }
}
