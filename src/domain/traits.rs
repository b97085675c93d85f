use crate::domain::model::PostKey;

/// Decides whether `current` republishes the same original content as `previous`.
///
/// Implementations must be deterministic and side-effect free.
pub trait XPostMatcher {
    fn same_x_post(&self, previous: &PostKey, current: &PostKey) -> bool;
}

impl<F> XPostMatcher for F
where
    F: Fn(&PostKey, &PostKey) -> bool,
{
    fn same_x_post(&self, previous: &PostKey, current: &PostKey) -> bool {
        self(previous, current)
    }
}
