//! Retrieval-augmented query engine: embed the question, pull the closest
//! passages, and stream a grounded answer from the chat model.

use crate::client::{ChatMessage, OllamaClient, TokenCounts};
use crate::error::AppError;

use super::index::VectorIndex;

pub(crate) struct QueryEngine<'a> {
    client: &'a OllamaClient,
    index: &'a VectorIndex,
    model: &'a str,
    embed_model: &'a str,
    top_k: usize,
}

/// Answers come from the retrieved context, not the model's prior knowledge;
/// the instruction wording keeps small local models from freelancing.
fn build_grounded_prompt(context: &[&str], question: &str) -> String {
    format!(
        "Context information is below.\n\
         ---------------------\n\
         {}\n\
         ---------------------\n\
         Given the context information and not prior knowledge, answer the query.\n\
         Query: {}\n\
         Answer:",
        context.join("\n\n"),
        question
    )
}

impl<'a> QueryEngine<'a> {
    pub(crate) fn new(
        client: &'a OllamaClient,
        index: &'a VectorIndex,
        model: &'a str,
        embed_model: &'a str,
        top_k: usize,
    ) -> Self {
        Self {
            client,
            index,
            model,
            embed_model,
            top_k,
        }
    }

    pub(crate) fn query(
        &self,
        question: &str,
        sink: impl FnMut(&str),
    ) -> Result<TokenCounts, AppError> {
        let query_embedding = self
            .client
            .embed(self.embed_model, &[question.to_string()])?
            .remove(0);
        let context = self.index.top_k(&query_embedding, self.top_k);
        let prompt = build_grounded_prompt(&context, question);
        self.client
            .chat_stream(self.model, vec![ChatMessage::user(prompt)], sink)
    }
}
