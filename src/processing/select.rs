//! Positional projection: selecting, removing and transposing entries.

use crate::error::{AnalysisError, AnalysisResult};

/// Output of [`select_entries`].
///
/// A single index yields the bare entry; two or more yield a list.
#[derive(Debug, Clone, PartialEq)]
pub enum Selected<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Selected<T> {
    /// The bare entry, if exactly one index was selected.
    pub fn into_one(self) -> Option<T> {
        match self {
            Selected::One(item) => Some(item),
            Selected::Many(_) => None,
        }
    }

    /// The selected entries as a list, whichever form was produced.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Selected::One(item) => vec![item],
            Selected::Many(items) => items,
        }
    }
}

fn entry_at<T: Clone>(items: &[T], index: usize) -> AnalysisResult<T> {
    items
        .get(index)
        .cloned()
        .ok_or(AnalysisError::IndexOutOfRange {
            index,
            len: items.len(),
        })
}

/// Returns a stage selecting the entries at `indices`.
///
/// With exactly one index the entry itself is returned ([`Selected::One`]); otherwise the
/// entries come back as [`Selected::Many`] in the order the indices were given. Any index past
/// the end fails with [`AnalysisError::IndexOutOfRange`].
pub fn select_entries<T, I>(indices: I) -> impl Fn(&Vec<T>) -> AnalysisResult<Selected<T>>
where
    T: Clone,
    I: IntoIterator<Item = usize>,
{
    let indices: Vec<usize> = indices.into_iter().collect();
    move |items| match indices.as_slice() {
        [index] => entry_at(items, *index).map(Selected::One),
        many => many
            .iter()
            .map(|&index| entry_at(items, index))
            .collect::<AnalysisResult<Vec<T>>>()
            .map(Selected::Many),
    }
}

/// Single-index form of [`select_entries`] returning the entry directly.
pub fn select_entry<T: Clone>(index: usize) -> impl Fn(&Vec<T>) -> AnalysisResult<T> {
    move |items| entry_at(items, index)
}

/// Returns a stage dropping the entries at `indices`; the rest keep their order.
///
/// Indices past the end are ignored.
pub fn remove_entries<T, I>(indices: I) -> impl Fn(&Vec<T>) -> AnalysisResult<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = usize>,
{
    let indices: Vec<usize> = indices.into_iter().collect();
    move |items| {
        Ok(items
            .iter()
            .enumerate()
            .filter(|(pos, _)| !indices.contains(pos))
            .map(|(_, item)| item.clone())
            .collect())
    }
}

/// Swap rows and columns.
///
/// Every row must have the length of the first; a ragged matrix fails with
/// [`AnalysisError::RaggedTable`]. An empty matrix transposes to an empty matrix.
#[allow(clippy::ptr_arg)]
pub fn transpose<T: Clone>(matrix: &Vec<Vec<T>>) -> AnalysisResult<Vec<Vec<T>>> {
    let width = match matrix.first() {
        Some(row) => row.len(),
        None => return Ok(Vec::new()),
    };
    if let Some((row, bad)) = matrix.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(AnalysisError::RaggedTable {
            row,
            expected: width,
            found: bad.len(),
        });
    }

    let mut out: Vec<Vec<T>> = (0..width).map(|_| Vec::with_capacity(matrix.len())).collect();
    for row in matrix {
        for (column, item) in out.iter_mut().zip(row) {
            column.push(item.clone());
        }
    }
    Ok(out)
}
