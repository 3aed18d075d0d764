use std::{fs, io, path::Path};

use anyhow::Context;
use card_core::{CardCopy, CardError};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "valentine.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub recipient: String,
    pub signature: Option<String>,
    pub seed: Option<u64>,
    pub haptics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recipient: "Lucia".into(),
            signature: None,
            seed: None,
            haptics: true,
        }
    }
}

impl Settings {
    pub fn copy(&self) -> CardCopy {
        let copy = CardCopy::for_recipient(self.recipient.clone());
        match &self.signature {
            Some(signature) => copy.with_signature(signature.clone()),
            None => copy,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    recipient: Option<String>,
    signature: Option<String>,
    seed: Option<u64>,
    haptics: Option<bool>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<FileSettings>(&raw)
                .with_context(|| format!("failed to parse '{}'", path.display()))?;
            if let Some(v) = file_cfg.recipient {
                settings.recipient = v;
            }
            if file_cfg.signature.is_some() {
                settings.signature = file_cfg.signature;
            }
            if file_cfg.seed.is_some() {
                settings.seed = file_cfg.seed;
            }
            if let Some(v) = file_cfg.haptics {
                settings.haptics = v;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()));
        }
    }

    if let Some(v) = env("VALENTINE_RECIPIENT") {
        settings.recipient = v;
    }
    if let Some(v) = env("APP__RECIPIENT") {
        settings.recipient = v;
    }

    if let Some(v) = env("APP__SIGNATURE") {
        settings.signature = Some(v);
    }

    if let Some(v) = env("APP__SEED") {
        let seed = v
            .trim()
            .parse::<u64>()
            .map_err(|_| CardError::config(format!("APP__SEED is not an integer: '{v}'")))?;
        settings.seed = Some(seed);
    }

    if let Some(v) = env("APP__HAPTICS") {
        settings.haptics = parse_flag(&v)
            .ok_or_else(|| CardError::config(format!("APP__HAPTICS is not a boolean: '{v}'")))?;
    }

    settings.recipient = settings.recipient.trim().to_string();
    if settings.recipient.is_empty() {
        settings.recipient = Settings::default().recipient;
    }

    Ok(settings)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
