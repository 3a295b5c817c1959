//! Optional TOML configuration for repeat presenters, so a workshop machine
//! can pin its model, host, and locale without retyping flags.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) offline: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) embed_model: Option<String>,
    #[serde(default)]
    pub(crate) host: Option<String>,
    #[serde(default)]
    pub(crate) data_dir: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    /// First readable, parseable file wins; a file that fails to parse is
    /// reported and skipped rather than aborting the demo.
    fn load_internal(quiet: bool) -> Self {
        for path in Self::config_paths() {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            match toml::from_str::<Config>(&content) {
                Ok(config) => {
                    if !quiet {
                        eprintln!("Loaded config from {}", path.display());
                    }
                    return config;
                }
                Err(e) => {
                    if !quiet {
                        eprintln!("Warning: skipping {}: {e}", path.display());
                    }
                }
            }
        }

        Self::default()
    }

    /// Lookup order: XDG-style `~/.config/civicdemo/config.toml`, then the
    /// platform config dir (distinct on macOS and Windows), then a bare
    /// `~/.civicdemo.toml` dotfile.
    fn config_paths() -> Vec<PathBuf> {
        let home = dirs::home_dir();
        let mut paths = Vec::with_capacity(3);

        if let Some(home) = &home {
            paths.push(home.join(".config").join("civicdemo").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            let native = config_dir.join("civicdemo").join("config.toml");
            if !paths.contains(&native) {
                paths.push(native);
            }
        }
        if let Some(home) = home {
            paths.push(home.join(".civicdemo.toml"));
        }

        paths
    }
}
