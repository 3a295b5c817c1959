//! CLI subcommand definitions

use clap::Subcommand;

use crate::tracks::TrackKey;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Stream a chat completion from the local model (default)
    Chat {
        /// Custom prompt instead of the built-in workshop prompt
        #[arg(long)]
        prompt: Option<String>,
    },
    /// Query a civic dataset with retrieval-augmented generation
    Rag {
        /// Hackathon track to query (eco, city, edu, justice)
        #[arg(default_value = "city", value_parser = TrackKey::parse)]
        track: TrackKey,

        /// Run all 3 sample questions for the track (default: 1 question)
        #[arg(long)]
        all: bool,

        /// Custom question instead of the track's sample questions
        #[arg(long)]
        query: Option<String>,
    },
    /// List the available workshop tracks
    Tracks,
    /// Show the cloud cost comparison for given token counts
    Estimate {
        /// Input (prompt) tokens
        #[arg(long, default_value_t = 0)]
        input: i64,

        /// Output (completion) tokens
        #[arg(long, default_value_t = 0)]
        output: i64,

        /// Elapsed wall-clock seconds of the measured run
        #[arg(long, default_value_t = 0.0)]
        seconds: f64,
    },
}
