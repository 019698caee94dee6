use crate::Seq;

/// Applies `f` to every element and collects the results in order.
///
/// An absent sequence yields an empty `Vec`.
pub fn map<'a, S, U, F>(seq: S, mut f: F) -> Vec<U>
where
    S: Seq<'a>,
    F: FnMut(&S::Item) -> U,
{
    let items = seq.into_seq().unwrap_or_default();
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(f(item));
    }
    out
}

/// Clones the elements for which `pred` holds, keeping their relative order.
pub fn filter<'a, S, F>(seq: S, mut pred: F) -> Vec<S::Item>
where
    S: Seq<'a>,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut out = Vec::new();
    for item in seq.into_seq().unwrap_or_default() {
        if pred(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Maps every element through a fallible `f`, dropping elements whose
/// callback returns `Err`. The errors themselves are discarded.
pub fn filter_errors<'a, S, U, E, F>(seq: S, mut f: F) -> Vec<U>
where
    S: Seq<'a>,
    F: FnMut(&S::Item) -> Result<U, E>,
{
    let mut out = Vec::new();
    for item in seq.into_seq().unwrap_or_default() {
        if let Ok(value) = f(item) {
            out.push(value);
        }
    }
    out
}

/// Calls `f` on every element in order, for its side effects.
pub fn for_each<'a, S, F>(seq: S, mut f: F)
where
    S: Seq<'a>,
    F: FnMut(&S::Item),
{
    for item in seq.into_seq().unwrap_or_default() {
        f(item);
    }
}
