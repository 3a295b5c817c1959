//! Blocking client for a locally running Ollama server.
//!
//! Everything the demos need from the model service goes through here:
//! streaming chat completions and batch embeddings. Inference itself is
//! entirely the server's business.

mod types;

use std::io::{BufRead, BufReader, Read};
use std::time::Duration;

use serde::Serialize;

use crate::error::AppError;

pub(crate) use types::{ChatMessage, TokenCounts};
use types::{ChatChunk, ChatRequest, EmbedRequest, EmbedResponse};

pub(crate) struct OllamaClient {
    agent: ureq::Agent,
    host: String,
}

impl OllamaClient {
    pub(crate) fn new(host: &str, timeout: Duration) -> Self {
        // Non-2xx responses are read manually so the server's error message
        // survives into AppError::Backend.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            host: host.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn host(&self) -> &str {
        &self.host
    }

    fn post(
        &self,
        path: &str,
        payload: &impl Serialize,
    ) -> Result<ureq::http::Response<ureq::Body>, AppError> {
        let url = format!("{}{}", self.host, path);
        self.agent
            .post(&url)
            .send_json(payload)
            .map_err(|e| AppError::Connect {
                host: self.host.clone(),
                source: Box::new(e),
            })
    }

    /// Stream a chat completion, feeding each content fragment to `sink` as
    /// it arrives. Returns the token counts from the final chunk.
    pub(crate) fn chat_stream(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
        mut sink: impl FnMut(&str),
    ) -> Result<TokenCounts, AppError> {
        let request = ChatRequest {
            model,
            messages,
            stream: true,
        };
        let response = self.post("/api/chat", &request)?;
        let status = response.status();
        let mut body = response.into_body();
        if !status.is_success() {
            return Err(backend_error(body.as_reader(), status.as_u16()));
        }

        let reader = BufReader::new(body.as_reader());
        let mut counts = TokenCounts::default();
        for line in reader.lines() {
            let line = line.map_err(AppError::Stream)?;
            if line.trim().is_empty() {
                continue;
            }
            let chunk: ChatChunk = serde_json::from_str(&line)?;
            if let Some(message) = chunk.error {
                return Err(AppError::Backend { message });
            }
            if let Some(message) = &chunk.message {
                sink(&message.content);
            }
            if chunk.done {
                counts.input_tokens = chunk.prompt_eval_count.unwrap_or(0);
                counts.output_tokens = chunk.eval_count.unwrap_or(0);
                break;
            }
        }
        Ok(counts)
    }

    /// Embed a batch of texts, one vector per input.
    pub(crate) fn embed(
        &self,
        model: &str,
        inputs: &[String],
    ) -> Result<Vec<Vec<f32>>, AppError> {
        let request = EmbedRequest {
            model,
            input: inputs,
        };
        let response = self.post("/api/embed", &request)?;
        let status = response.status();
        let mut body = response.into_body();
        if !status.is_success() {
            return Err(backend_error(body.as_reader(), status.as_u16()));
        }

        let parsed: EmbedResponse = serde_json::from_reader(body.as_reader())?;
        if parsed.embeddings.len() != inputs.len() {
            return Err(AppError::EmbeddingCount {
                expected: inputs.len(),
                got: parsed.embeddings.len(),
            });
        }
        Ok(parsed.embeddings)
    }
}

fn backend_error(reader: impl Read, status: u16) -> AppError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }
    match serde_json::from_reader::<_, ErrorBody>(reader) {
        Ok(body) => AppError::Backend {
            message: body.error,
        },
        Err(_) => AppError::Backend {
            message: format!("HTTP {status}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://127.0.0.1:11434/", Duration::from_secs(1));
        assert_eq!(client.host(), "http://127.0.0.1:11434");
    }

    #[test]
    fn backend_error_prefers_server_message() {
        let e = backend_error(r#"{"error":"model not found"}"#.as_bytes(), 404);
        assert_eq!(e.to_string(), "Ollama reported an error: model not found");
    }

    #[test]
    fn backend_error_falls_back_to_status() {
        let e = backend_error("<html>bad gateway</html>".as_bytes(), 502);
        assert_eq!(e.to_string(), "Ollama reported an error: HTTP 502");
    }
}
