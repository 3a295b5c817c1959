//! In-memory vector index over document passages.
//!
//! A workshop dataset is a few dozen passages, so retrieval is a brute-force
//! cosine scan over normalized embeddings.

use crate::client::OllamaClient;
use crate::error::AppError;

pub(crate) struct VectorIndex {
    passages: Vec<String>,
    /// L2-normalized, parallel to `passages`
    embeddings: Vec<Vec<f32>>,
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl VectorIndex {
    /// Embed every passage through the local embedding model.
    pub(crate) fn build(
        client: &OllamaClient,
        embed_model: &str,
        passages: Vec<String>,
    ) -> Result<Self, AppError> {
        let mut embeddings = client.embed(embed_model, &passages)?;
        for embedding in &mut embeddings {
            normalize(embedding);
        }
        Ok(Self {
            passages,
            embeddings,
        })
    }

    #[cfg(test)]
    fn from_raw(passages: Vec<String>, mut embeddings: Vec<Vec<f32>>) -> Self {
        for embedding in &mut embeddings {
            normalize(embedding);
        }
        Self {
            passages,
            embeddings,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.passages.len()
    }

    /// Top-k passages by cosine similarity to an already-computed query
    /// embedding, best first.
    pub(crate) fn top_k(&self, query: &[f32], k: usize) -> Vec<&str> {
        let mut query = query.to_vec();
        normalize(&mut query);

        let mut scored: Vec<(usize, f32)> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(i, emb)| (i, dot(&query, emb)))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(i, _)| self.passages[i].as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> VectorIndex {
        VectorIndex::from_raw(
            vec![
                "air quality".to_string(),
                "school buses".to_string(),
                "court backlog".to_string(),
            ],
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
        )
    }

    #[test]
    fn top_k_returns_closest_first() {
        let index = index();
        let hits = index.top_k(&[0.9, 0.4, 0.0], 2);
        assert_eq!(hits, vec!["air quality", "school buses"]);
    }

    #[test]
    fn top_k_caps_at_index_size() {
        let index = index();
        let hits = index.top_k(&[1.0, 0.0, 0.0], 10);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn cosine_ignores_magnitude() {
        let index = index();
        let small = index.top_k(&[0.001, 0.0005, 0.0], 1);
        let large = index.top_k(&[1000.0, 500.0, 0.0], 1);
        assert_eq!(small, large);
    }

    #[test]
    fn zero_query_does_not_panic() {
        let index = index();
        let hits = index.top_k(&[0.0, 0.0, 0.0], 1);
        assert_eq!(hits.len(), 1);
    }
}
