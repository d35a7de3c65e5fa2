use std::collections::HashSet;

use log::debug;

use crate::config::Settings;

/// Apply the length window and drop duplicates, first occurrence winning.
/// Candidates of one character or less never survive, whatever the window
/// says. With `sort_output` the survivors are ordered by (length, lexical)
/// for stable presentation; otherwise first-seen order is kept.
pub(crate) fn finalize(candidates: Vec<String>, settings: &Settings) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<String> = Vec::new();

    for candidate in candidates {
        let length = candidate.chars().count();
        if length <= 1 {
            continue;
        }
        if length < settings.min_length || length > settings.max_length {
            continue;
        }
        if seen.insert(candidate.clone()) {
            kept.push(candidate);
        }
    }

    if settings.sort_output {
        kept.sort_by(|a, b| {
            a.chars()
                .count()
                .cmp(&b.chars().count())
                .then_with(|| a.cmp(b))
        });
    }

    debug!("Kept {} candidates after filtering", kept.len());
    kept
}
