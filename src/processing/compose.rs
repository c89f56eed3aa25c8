//! Composition and fan-out combinators.
//!
//! Every combinator in [`crate::processing`] is a factory: it takes its configuration and returns
//! a single-argument transformation `Fn(&In) -> AnalysisResult<Out>`. Those transformations
//! compose with [`then`] / [`crate::pipe!`] (heterogeneous stages) or [`pipeline`] (a list of
//! same-typed stages).

use crate::error::AnalysisResult;

use super::reduce::try_reduce;

/// A boxed transformation stage, used where stages are collected into a list.
pub type Stage<'a, In, Out> = Box<dyn Fn(&In) -> AnalysisResult<Out> + 'a>;

/// Box a transformation so it can be stored next to differently-typed closures.
pub fn stage<'a, In, Out, F>(f: F) -> Stage<'a, In, Out>
where
    F: Fn(&In) -> AnalysisResult<Out> + 'a,
{
    Box::new(f)
}

/// The identity stage.
pub fn identity<T: Clone>(input: &T) -> AnalysisResult<T> {
    Ok(input.clone())
}

/// Compose two stages left to right: `then(f, g)(x) == g(f(x))`.
///
/// If `first` fails, `second` never runs.
pub fn then<A, B, C, F, G>(first: F, second: G) -> impl Fn(&A) -> AnalysisResult<C>
where
    F: Fn(&A) -> AnalysisResult<B>,
    G: Fn(&B) -> AnalysisResult<C>,
{
    move |input| {
        let mid = first(input)?;
        second(&mid)
    }
}

/// Compose a list of same-typed stages left to right by folding the input through them.
///
/// An empty pipeline is the identity. The first failing stage aborts the fold.
pub fn pipeline<'a, T>(stages: Vec<Stage<'a, T, T>>) -> impl Fn(&T) -> AnalysisResult<T> + 'a
where
    T: Clone + 'a,
{
    move |input| try_reduce(|acc: T, step: &Stage<'a, T, T>| step(&acc), &stages, input.clone())
}

/// Fan-out: run every branch on the same input and collect the results in branch order.
pub fn do_each<'a, In, Out>(
    branches: Vec<Stage<'a, In, Out>>,
) -> impl Fn(&In) -> AnalysisResult<Vec<Out>> + 'a
where
    In: 'a,
    Out: 'a,
{
    move |input| branches.iter().map(|branch| branch(input)).collect()
}

/// Apply `f` to the entries at `indices`; every other entry passes through unchanged.
pub fn operating_on<T, I, F>(indices: I, f: F) -> impl Fn(&Vec<T>) -> AnalysisResult<Vec<T>>
where
    T: Clone,
    I: IntoIterator<Item = usize>,
    F: Fn(&T) -> AnalysisResult<T>,
{
    let indices: Vec<usize> = indices.into_iter().collect();
    move |items| {
        items
            .iter()
            .enumerate()
            .map(|(pos, item)| {
                if indices.contains(&pos) {
                    f(item)
                } else {
                    Ok(item.clone())
                }
            })
            .collect()
    }
}

/// Left-to-right composition of any number of stages.
///
/// `pipe!(f, g, h)` is `then(f, then(g, h))`; a single stage is returned as is.
#[macro_export]
macro_rules! pipe {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::processing::then($first, $crate::pipe!($($rest),+))
    };
}
