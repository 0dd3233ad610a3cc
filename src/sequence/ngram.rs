use std::collections::HashMap;

/// Type alias for the frequency table: joined sequence text to occurrence count
pub type NGramMap = HashMap<String, usize>;

/// Separator placed between the words of a sequence key
pub const KEY_SEPARATOR: &str = " ";

/// Extracts N-gram sequences from a complete token list
///
/// This is the batch counterpart of
/// [`SequenceCounter::ingest`](super::SequenceCounter::ingest) for a single
/// unit: both produce the same table for the same tokens.
///
/// # Example
/// ```
/// use wordgrams::sequence::extract_ngrams;
///
/// let words = vec!["the".to_string(), "quick".to_string(), "brown".to_string(), "fox".to_string()];
/// let ngrams = extract_ngrams(&words, 3);
///
/// assert_eq!(ngrams.len(), 2);
/// assert_eq!(ngrams.get("the quick brown"), Some(&1));
/// ```
pub fn extract_ngrams(tokens: &[String], n: usize) -> NGramMap {
    let mut ngrams: NGramMap = HashMap::new();

    if n == 0 || tokens.len() < n {
        return ngrams;
    }

    for window in tokens.windows(n) {
        *ngrams.entry(window.join(KEY_SEPARATOR)).or_insert(0) += 1;
    }

    ngrams
}

/// Calculate N-gram coverage (unique N-grams vs total occurrences)
///
/// 1.0 means no sequence repeats; values near 0 mean highly repetitive text.
pub fn ngram_coverage(ngrams: &NGramMap) -> f64 {
    if ngrams.is_empty() {
        return 0.0;
    }

    let unique_count = ngrams.len();
    let total_count: usize = ngrams.values().sum();

    unique_count as f64 / total_count as f64
}

/// Find the `k` most frequent N-grams
///
/// Sorted by count descending; equal counts are ordered by sequence text
/// ascending so the result does not depend on hash iteration order.
pub fn top_ngrams(ngrams: &NGramMap, k: usize) -> Vec<(String, usize)> {
    let mut ngram_vec: Vec<_> = ngrams
        .iter()
        .map(|(ngram, count)| (ngram.clone(), *count))
        .collect();

    ngram_vec.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ngram_vec.truncate(k);

    ngram_vec
}
