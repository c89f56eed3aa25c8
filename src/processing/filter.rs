//! Predicate filtering and key-based deduplication.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::AnalysisResult;

/// Returns a stage keeping the items for which `predicate` holds, in their original order.
///
/// The predicate is fallible so that it can read fields that might be missing or mistyped.
pub fn filter_by<T, P>(predicate: P) -> impl Fn(&Vec<T>) -> AnalysisResult<Vec<T>>
where
    T: Clone,
    P: Fn(&T) -> AnalysisResult<bool>,
{
    move |items| {
        let mut out = Vec::new();
        for item in items {
            if predicate(item)? {
                out.push(item.clone());
            }
        }
        Ok(out)
    }
}

/// Returns a stage keeping one item per distinct `key(item)`.
///
/// The last occurrence of a key wins, but it takes the position where that key was first seen.
pub fn distinct<T, K, F>(key: F) -> impl Fn(&Vec<T>) -> AnalysisResult<Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> AnalysisResult<K>,
{
    move |items| {
        let mut slots: HashMap<K, usize> = HashMap::with_capacity(items.len());
        let mut out: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            let k = key(item)?;
            if let Some(&slot) = slots.get(&k) {
                out[slot] = item.clone();
            } else {
                slots.insert(k, out.len());
                out.push(item.clone());
            }
        }
        Ok(out)
    }
}
