mod keybindings;
mod styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use ratatui::style::Style;
use serde::Deserialize;

pub use keybindings::{parse_key_sequence, KeyBindings};
pub use styles::Styles;

use crate::utils;

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub relay_endpoint: String,
}

impl Config {
    /// Load configuration from the embedded defaults, overlaid with any
    /// config file found in the user's config directory. A missing user
    /// file is fine; the defaults cover everything except `relay_endpoint`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG).unwrap();
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap())?
            .set_default("_config_dir", config_dir.to_str().unwrap())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::warn!("No configuration file found, using embedded defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, cmd) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| cmd.clone());
            }
        }
        for (name, style) in default_config.styles.iter() {
            cfg.styles.entry(name.clone()).or_insert(*style);
        }
        if cfg.relay_endpoint.is_empty() {
            cfg.relay_endpoint = default_config.relay_endpoint.clone();
        }

        Ok(cfg)
    }

    /// Look up a named style, falling back to the terminal default.
    pub fn style(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::action::Action;
    use crate::mode::Mode;
    use crate::section::Section;

    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let c: Config = json5::from_str(CONFIG).unwrap();
        let browse = c.keybindings.get(&Mode::Browse).unwrap();
        assert_eq!(
            browse.get(&parse_key_sequence("<q>").unwrap()),
            Some(&Action::Quit)
        );
        assert_eq!(
            browse.get(&parse_key_sequence("<6>").unwrap()),
            Some(&Action::GoToSection(Section::Booking))
        );
        let booking = c.keybindings.get(&Mode::Booking).unwrap();
        assert_eq!(
            booking.get(&parse_key_sequence("<esc>").unwrap()),
            Some(&Action::LeaveForm)
        );
    }

    #[test]
    fn test_embedded_defaults_have_styles_but_no_endpoint() {
        let c: Config = json5::from_str(CONFIG).unwrap();
        assert!(c.styles.contains_key("error"));
        assert!(c.styles.contains_key("accent"));
        assert_eq!(c.relay_endpoint, "");
    }
}
