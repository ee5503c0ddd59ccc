use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::models::report::KeywordCount;

/// Low-information words excluded from keyword frequency analysis:
/// pronouns, articles, auxiliary verbs, and common fillers.
const STOP_WORDS: &[&str] = &[
    "i", "am", "feel", "feeling", "im", "the", "a", "an", "and", "or", "but",
    "to", "of", "in", "on", "at", "for", "with", "is", "was", "are", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "my", "me", "so", "very", "really", "just", "like", "about",
    "today", "yesterday",
];

const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Frequency-ranked keywords across the given texts, most frequent first.
/// Ties rank in first-encountered order; output is capped at `limit`.
pub fn top_keywords<'a, I>(texts: I, limit: usize) -> Vec<KeywordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for text in texts {
        let lowered = text.to_lowercase();
        for raw in lowered.split_whitespace() {
            let token = raw.trim_matches(|c| EDGE_PUNCTUATION.contains(&c));
            if token.chars().count() <= 3 || stop_words.contains(token) {
                continue;
            }
            match counts.entry(token.to_string()) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    entry.insert(1);
                    first_seen.push(token.to_string());
                }
            }
        }
    }

    let mut ranked: Vec<KeywordCount> = first_seen
        .into_iter()
        .map(|word| {
            let count = counts.get(&word).copied().unwrap_or(0);
            KeywordCount { word, count }
        })
        .collect();
    // Stable sort keeps first-encountered order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ranked: &[KeywordCount]) -> Vec<&str> {
        ranked.iter().map(|k| k.word.as_str()).collect()
    }

    // Scenario E from the product brief.
    #[test]
    fn test_stop_words_and_repeats() {
        let ranked = top_keywords(["I am feeling anxious anxious today"], 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "anxious");
        assert_eq!(ranked[0].count, 2);
    }

    #[test]
    fn test_short_tokens_discarded() {
        let ranked = top_keywords(["sad mad calm okay glad hope"], 10);
        assert_eq!(words(&ranked), vec!["calm", "okay", "glad", "hope"]);
    }

    #[test]
    fn test_edge_punctuation_stripped() {
        let ranked = top_keywords(["anxious, anxious! anxious?"], 10);
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn test_ties_rank_by_first_encountered() {
        let ranked = top_keywords(["worried tired", "tired worried lonely lonely"], 10);
        assert_eq!(words(&ranked), vec!["worried", "tired", "lonely"]);
    }

    #[test]
    fn test_frequency_outranks_order() {
        let ranked = top_keywords(["lonely", "overwhelmed overwhelmed"], 10);
        assert_eq!(words(&ranked), vec!["overwhelmed", "lonely"]);
    }

    #[test]
    fn test_capped_at_limit() {
        let text = "alpha1 alpha2 alpha3 alpha4 alpha5 alpha6 alpha7 alpha8 alpha9 alpha10 alpha11 alpha12";
        let ranked = top_keywords([text], 10);
        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn test_lowercasing_merges_variants() {
        let ranked = top_keywords(["Anxious ANXIOUS anxious"], 10);
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(top_keywords(std::iter::empty::<&str>(), 10).is_empty());
    }
}
