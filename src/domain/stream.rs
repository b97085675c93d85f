use crate::domain::model::PostKey;
use crate::domain::traits::XPostMatcher;

/// One surviving record of the fold, plus what it absorbed.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRun {
    /// Index of the run's first element in the input.
    pub position: usize,
    pub record: PostKey,
    /// Number of duplicates folded into `record`.
    pub folded: usize,
    /// Folded duplicates that had no url to contribute.
    pub missing_urls: usize,
}

/// Folds adjacent x-posts, reporting each run.
///
/// Each candidate is compared with the last record already in the output,
/// which is the merged record once a run has started. That is what lets
/// three or more consecutive duplicates collapse into one entry.
pub fn fold_adjacent_runs(keys: &[PostKey], matcher: &dyn XPostMatcher) -> Vec<MergedRun> {
    let mut runs: Vec<MergedRun> = Vec::with_capacity(keys.len());

    for (position, key) in keys.iter().enumerate() {
        match runs.last_mut() {
            Some(last) if matcher.same_x_post(&last.record, key) => {
                last.record = last.record.with_duplicate_url(key);
                last.folded += 1;
                if key.url.is_none() {
                    last.missing_urls += 1;
                }
            }
            _ => runs.push(MergedRun {
                position,
                record: key.clone(),
                folded: 0,
                missing_urls: 0,
            }),
        }
    }

    runs
}

/// Combines adjacent x-posts of the same original content into one record.
///
/// Pure: the input is left untouched and the output is never longer than it.
pub fn merge_adjacent_duplicates(keys: &[PostKey], matcher: &dyn XPostMatcher) -> Vec<PostKey> {
    fold_adjacent_runs(keys, matcher)
        .into_iter()
        .map(|run| run.record)
        .collect()
}

/// Folds `duplicate` into `base`. See [`PostKey::with_duplicate_url`].
pub fn merge_one(base: &PostKey, duplicate: &PostKey) -> PostKey {
    base.with_duplicate_url(duplicate)
}
