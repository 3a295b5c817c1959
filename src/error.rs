use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Unknown track \"{input}\" (expected eco, city, edu, or justice)")]
    UnknownTrack { input: String },

    #[error("Cannot read data file {}: {source}", path.display())]
    DataFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Data file {} is empty", path.display())]
    EmptyDocument { path: PathBuf },

    #[error("Cannot reach Ollama at {host} ({source}). Is it running? Start it with `ollama serve`.")]
    Connect {
        host: String,
        source: Box<ureq::Error>,
    },

    #[error("Ollama reported an error: {message}")]
    Backend { message: String },

    #[error("Malformed response from Ollama: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Lost connection while streaming: {0}")]
    Stream(std::io::Error),

    #[error("Embedding response returned {got} vectors for {expected} inputs")]
    EmbeddingCount { expected: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_track_display() {
        let e = AppError::UnknownTrack {
            input: "space".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown track "space" (expected eco, city, edu, or justice)"#
        );
    }

    #[test]
    fn unsupported_locale_display() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn backend_display() {
        let e = AppError::Backend {
            message: "model \"llama3.1\" not found".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Ollama reported an error: model \"llama3.1\" not found"
        );
    }

    #[test]
    fn embedding_count_display() {
        let e = AppError::EmbeddingCount {
            expected: 4,
            got: 3,
        };
        assert_eq!(
            e.to_string(),
            "Embedding response returned 3 vectors for 4 inputs"
        );
    }

    #[test]
    fn data_file_display_includes_path() {
        let e = AppError::DataFile {
            path: PathBuf::from("data/missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(e.to_string().contains("data/missing.txt"));
    }
}
