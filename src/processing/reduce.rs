//! Left folds.
//!
//! Both folds are iterative, so sequence length is bounded only by memory.

/// Fold `seq` from the left, starting from `initial`.
///
/// Returns `initial` unchanged when `seq` is empty.
pub fn reduce<T, A, F>(mut f: F, seq: &[T], initial: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    seq.iter().fold(initial, |acc, item| f(acc, item))
}

/// Fallible left fold: the first `Err` returned by `f` stops the fold and is returned.
pub fn try_reduce<T, A, E, F>(mut f: F, seq: &[T], initial: A) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    seq.iter().try_fold(initial, |acc, item| f(acc, item))
}
