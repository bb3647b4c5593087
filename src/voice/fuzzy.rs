//! Resolving spoken names ("oma", "jan") against contact names and field labels

use super::settings::VoiceSettings;

/// A candidate that matched a spoken name
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    /// Position of the candidate in the list that was searched
    pub index: usize,
    pub name: String,
    /// Similarity in 0.0-1.0 (1.0 for an exact, case-insensitive hit)
    pub score: f64,
}

/// Similarity of a spoken query to a name.
///
/// The query is compared against the whole name and against each word of
/// it, so "oma" scores 1.0 for "Oma de Vries".
pub fn name_similarity(query: &str, name: &str) -> f64 {
    let query = query.trim().to_lowercase();
    let name = name.trim().to_lowercase();
    if query.is_empty() || name.is_empty() {
        return 0.0;
    }
    if query == name || name.split_whitespace().any(|word| word == query) {
        return 1.0;
    }

    std::iter::once(name.as_str())
        .chain(name.split_whitespace())
        .map(|candidate| strsim::jaro_winkler(&query, candidate))
        .fold(0.0, f64::max)
}

/// Pick the candidate that best matches a spoken name.
///
/// Exact (case-insensitive) hits on the full name or one of its words always
/// count. Approximate hits count only when fuzzy matching is enabled and the
/// score reaches `fuzzy_matching_threshold`. The highest score wins; on a tie
/// the earlier candidate is kept.
pub fn find_best_name<S: AsRef<str>>(query: &str, candidates: &[S], settings: &VoiceSettings) -> Option<NameMatch> {
    let threshold = f64::from(settings.fuzzy_matching_threshold);
    let mut best: Option<NameMatch> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let name = candidate.as_ref();
        let score = name_similarity(query, name);

        let accepted = score >= 1.0 || (settings.fuzzy_matching_enabled && score >= threshold);
        if !accepted {
            continue;
        }
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(NameMatch {
                index,
                name: name.to_string(),
                score,
            });
        }
    }

    if let Some(ref m) = best {
        tracing::debug!("Name '{}' resolved to '{}' (score {:.2})", query, m.name, m.score);
    }
    best
}
