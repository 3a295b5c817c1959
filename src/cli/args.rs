//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{
    DEFAULT_DATA_DIR, DEFAULT_EMBED_MODEL, DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "civicdemo")]
#[command(about = "Local LLM workshop demos with cloud cost comparison", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<super::Commands>,

    /// Chat model served by Ollama
    #[arg(short, long, global = true, default_value = DEFAULT_MODEL)]
    pub(crate) model: String,

    /// Embedding model for the RAG demo
    #[arg(long, global = true, default_value = DEFAULT_EMBED_MODEL)]
    pub(crate) embed_model: String,

    /// Ollama base URL
    #[arg(long, global = true, default_value = DEFAULT_HOST)]
    pub(crate) host: String,

    /// Directory containing the track data files
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub(crate) data_dir: String,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub(crate) timeout: u64,

    /// Output as JSON (tracks and estimate commands)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Use offline cached pricing (skip fetching from LiteLLM)
    #[arg(short = 'O', long, global = true)]
    pub(crate) offline: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies when CLI left them at default
        if !self.offline && config.offline {
            self.offline = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply when CLI kept the built-in default
        if self.model == DEFAULT_MODEL
            && let Some(model) = &config.model
        {
            self.model = model.clone();
        }
        if self.embed_model == DEFAULT_EMBED_MODEL
            && let Some(embed_model) = &config.embed_model
        {
            self.embed_model = embed_model.clone();
        }
        if self.host == DEFAULT_HOST
            && let Some(host) = &config.host
        {
            self.host = host.clone();
        }
        if self.data_dir == DEFAULT_DATA_DIR
            && let Some(data_dir) = &config.data_dir
        {
            self.data_dir = data_dir.clone();
        }
        if self.timeout == DEFAULT_TIMEOUT_SECS
            && let Some(timeout) = config.timeout_secs
        {
            self.timeout = timeout;
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("civicdemo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_consts() {
        let cli = parse(&[]);
        assert_eq!(cli.model, DEFAULT_MODEL);
        assert_eq!(cli.host, DEFAULT_HOST);
        assert_eq!(cli.timeout, DEFAULT_TIMEOUT_SECS);
        assert!(!cli.offline);
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            offline: true,
            model: Some("llama3.2".to_string()),
            host: Some("http://10.0.0.5:11434".to_string()),
            locale: Some("de".to_string()),
            timeout_secs: Some(300),
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert!(cli.offline);
        assert_eq!(cli.model, "llama3.2");
        assert_eq!(cli.host, "http://10.0.0.5:11434");
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert_eq!(cli.timeout, 300);
    }

    #[test]
    fn cli_args_beat_config() {
        let config = Config {
            model: Some("from-config".to_string()),
            timeout_secs: Some(300),
            ..Config::default()
        };
        let cli = parse(&["--model", "from-cli", "--timeout", "10"]).with_config(&config);
        assert_eq!(cli.model, "from-cli");
        assert_eq!(cli.timeout, 10);
    }

    #[test]
    fn no_color_flag_wins() {
        let cli = parse(&["--no-color", "--color", "always"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn config_color_applies_at_auto() {
        let config = Config {
            color: Some(ConfigColorMode::Always),
            ..Config::default()
        };
        let cli = parse(&[]).with_config(&config);
        assert_eq!(cli.color, ColorMode::Always);
        assert!(cli.use_color());
    }
}
