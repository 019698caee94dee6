use crate::Seq;

/// Returns `true` if `pred` holds for every element.
///
/// An empty sequence satisfies this vacuously, but an absent one does not:
/// `every(None, _)` is `false`.
pub fn every<'a, S, F>(seq: S, mut pred: F) -> bool
where
    S: Seq<'a>,
    F: FnMut(&S::Item) -> bool,
{
    let Some(items) = seq.into_seq() else {
        return false;
    };
    for item in items {
        if !pred(item) {
            return false;
        }
    }
    true
}

/// Returns `true` if `pred` holds for at least one element.
pub fn some<'a, S, F>(seq: S, mut pred: F) -> bool
where
    S: Seq<'a>,
    F: FnMut(&S::Item) -> bool,
{
    for item in seq.into_seq().unwrap_or_default() {
        if pred(item) {
            return true;
        }
    }
    false
}

/// Position of the first element equal to `target`, or `-1`.
pub fn index<'a, S>(seq: S, target: &S::Item) -> isize
where
    S: Seq<'a>,
    S::Item: PartialEq,
{
    index_func(seq, |item| item == target)
}

/// Position of the first element matching `pred`, or `-1`.
pub fn index_func<'a, S, F>(seq: S, mut pred: F) -> isize
where
    S: Seq<'a>,
    F: FnMut(&S::Item) -> bool,
{
    for (i, item) in seq.into_seq().unwrap_or_default().iter().enumerate() {
        if pred(item) {
            // Slice lengths never exceed `isize::MAX`.
            return i as isize;
        }
    }
    -1
}

/// Whether any element equals `target`.
pub fn contains<'a, S>(seq: S, target: &S::Item) -> bool
where
    S: Seq<'a>,
    S::Item: PartialEq,
{
    index(seq, target) >= 0
}

/// Returns the first element matching `pred` and `true`, or the default
/// value and `false`.
///
/// Check the flag: the default value may itself be a legitimate element.
pub fn find<'a, S, F>(seq: S, mut pred: F) -> (S::Item, bool)
where
    S: Seq<'a>,
    S::Item: Clone + Default,
    F: FnMut(&S::Item) -> bool,
{
    for item in seq.into_seq().unwrap_or_default() {
        if pred(item) {
            return (item.clone(), true);
        }
    }
    (Default::default(), false)
}

/// Left fold: `f(...f(f(initial, s[0]), s[1])..., s[n-1])`.
pub fn reduce<'a, S, A, F>(seq: S, initial: A, mut f: F) -> A
where
    S: Seq<'a>,
    F: FnMut(A, &S::Item) -> A,
{
    let mut acc = initial;
    for item in seq.into_seq().unwrap_or_default() {
        acc = f(acc, item);
    }
    acc
}
