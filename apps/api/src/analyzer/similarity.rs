//! Similarity scoring: a pluggable, trait-based scorer that measures a resume
//! against a job description.
//!
//! Default: `TfidfScorer` (pure-Rust, fast, deterministic, fully testable).
//! `AppState` holds an `Arc<dyn SimilarityScorer>`, so an embedding-based
//! backend can be swapped in at startup without touching handler code.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;

use crate::errors::AppError;

/// The similarity scorer trait. Scores are percentages in [0, 100].
///
/// Inputs are preprocessed token strings (see `preprocess`); the same inputs
/// must always yield the same score.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Backend label reported alongside results, e.g. "tfidf".
    fn backend(&self) -> &'static str;

    async fn score(&self, jd_processed: &str, resume_processed: &str) -> Result<f64, AppError>;
}

/// TF-IDF scorer over the two-document corpus {job description, resume}.
///
/// Algorithm:
/// 1. Build the term vocabulary from both token streams.
/// 2. For each term: tf = count / doc_len, idf = ln((1 + N) / (1 + df)) + 1
///    with N = 2 (smoothed, as in scikit-learn).
/// 3. Cosine similarity of the two weighted vectors, clamped to [0, 1],
///    scaled to a percentage.
pub struct TfidfScorer;

#[async_trait]
impl SimilarityScorer for TfidfScorer {
    fn backend(&self) -> &'static str {
        "tfidf"
    }

    async fn score(&self, jd_processed: &str, resume_processed: &str) -> Result<f64, AppError> {
        Ok(tfidf_cosine(jd_processed, resume_processed) * 100.0)
    }
}

/// Cosine similarity of TF-IDF vectors, in [0, 1]. Empty input on either
/// side yields 0.0.
pub fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let a_tokens: Vec<&str> = a.split_whitespace().collect();
    let b_tokens: Vec<&str> = b.split_whitespace().collect();
    if a_tokens.is_empty() || b_tokens.is_empty() {
        return 0.0;
    }

    let a_counts = term_counts(&a_tokens);
    let b_counts = term_counts(&b_tokens);

    // BTreeSet keeps vector component order stable across runs.
    let vocabulary: BTreeSet<&str> = a_counts.keys().chain(b_counts.keys()).copied().collect();

    let mut dot = 0.0_f64;
    let mut a_norm_sq = 0.0_f64;
    let mut b_norm_sq = 0.0_f64;

    for term in vocabulary {
        let a_count = a_counts.get(term).copied().unwrap_or(0);
        let b_count = b_counts.get(term).copied().unwrap_or(0);

        let df = (a_count > 0) as u32 + (b_count > 0) as u32;
        let idf = ((1.0 + 2.0) / (1.0 + f64::from(df))).ln() + 1.0;

        let a_weight = a_count as f64 / a_tokens.len() as f64 * idf;
        let b_weight = b_count as f64 / b_tokens.len() as f64 * idf;

        dot += a_weight * b_weight;
        a_norm_sq += a_weight * a_weight;
        b_norm_sq += b_weight * b_weight;
    }

    if a_norm_sq == 0.0 || b_norm_sq == 0.0 {
        return 0.0;
    }

    (dot / (a_norm_sq.sqrt() * b_norm_sq.sqrt())).clamp(0.0, 1.0)
}

fn term_counts<'a>(tokens: &[&'a str]) -> HashMap<&'a str, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let text = "rust backend engineer distributed system";
        let score = tfidf_cosine(text, text);
        assert!((score - 1.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let score = tfidf_cosine("rust tokio axum", "painting sculpture pottery");
        assert!(score.abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_partial_overlap_is_between() {
        let score = tfidf_cosine("rust python sql", "rust java sql");
        assert!(score > 0.0 && score < 1.0, "score was {score}");
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(tfidf_cosine("", "rust"), 0.0);
        assert_eq!(tfidf_cosine("rust", ""), 0.0);
        assert_eq!(tfidf_cosine("", ""), 0.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let jd = "senior rust engineer kubernetes aws terraform";
        let resume = "rust engineer with aws experience and terraform modules";
        let first = tfidf_cosine(jd, resume);
        for _ in 0..10 {
            assert_eq!(tfidf_cosine(jd, resume), first);
        }
    }

    #[test]
    fn test_score_is_symmetric() {
        let a = "rust grpc protobuf";
        let b = "grpc services in go";
        assert!((tfidf_cosine(a, b) - tfidf_cosine(b, a)).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_scorer_returns_percentage() {
        let scorer = TfidfScorer;
        let text = "rust backend engineer";
        let score = scorer.score(text, text).await.unwrap();
        assert!((score - 100.0).abs() < 1e-9, "score was {score}");
        assert_eq!(scorer.backend(), "tfidf");
    }

    #[tokio::test]
    async fn test_scorer_bounds() {
        let scorer = TfidfScorer;
        let score = scorer
            .score("rust python", "rust haskell")
            .await
            .unwrap();
        assert!((0.0..=100.0).contains(&score), "score was {score}");
    }
}
