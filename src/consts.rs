/// Chat model pulled during workshop setup (`ollama pull llama3.1`)
pub(crate) const DEFAULT_MODEL: &str = "llama3.1";

/// Embedding model for the RAG demo (`ollama pull all-minilm`)
pub(crate) const DEFAULT_EMBED_MODEL: &str = "all-minilm";

/// Local Ollama endpoint
pub(crate) const DEFAULT_HOST: &str = "http://127.0.0.1:11434";

/// Directory holding the bundled track data files
pub(crate) const DEFAULT_DATA_DIR: &str = "data";

/// Request timeout in seconds; index builds on older laptops are slow
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Width of the rules drawn around demo sections
pub(crate) const RULE_WIDTH: usize = 60;

/// Passages retrieved per RAG query
pub(crate) const SIMILARITY_TOP_K: usize = 3;

/// Target passage size in characters when chunking a document
pub(crate) const CHUNK_TARGET_CHARS: usize = 800;

/// Prompt streamed by the `chat` exercise when none is given
pub(crate) const CHAT_PROMPT: &str = "You are a civic technology advisor. In 3 concise bullet points, \
explain why open source AI matters for building tools that serve \
communities, especially for students at a hackathon who want to \
make a real impact this weekend.";
