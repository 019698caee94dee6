use std::collections::{BTreeMap, HashMap, btree_map, hash_map};

/// A borrowed, read-only sequence source.
///
/// `into_seq` returns `None` for an absent sequence, which is distinct from
/// `Some(&[])`. Absence is expressed by wrapping any source in `Option`.
pub trait Seq<'a> {
    type Item: 'a;

    fn into_seq(self) -> Option<&'a [Self::Item]>;
}

/// A borrowed, mutable sequence source for the in-place operations.
pub trait SeqMut<'a> {
    type Item: 'a;

    fn into_seq_mut(self) -> Option<&'a mut [Self::Item]>;
}

/// A borrowed key/value association.
///
/// Iteration order is whatever the underlying map yields.
pub trait Mapping<'a> {
    type Key: 'a;
    type Value: 'a;
    type Iter: ExactSizeIterator<Item = (&'a Self::Key, &'a Self::Value)>;

    fn into_entries(self) -> Option<Self::Iter>;
}

impl<'a, T> Seq<'a> for &'a [T] {
    type Item = T;

    #[inline]
    fn into_seq(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T> Seq<'a> for &'a Vec<T> {
    type Item = T;

    #[inline]
    fn into_seq(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T, const N: usize> Seq<'a> for &'a [T; N] {
    type Item = T;

    #[inline]
    fn into_seq(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, S: Seq<'a>> Seq<'a> for Option<S> {
    type Item = S::Item;

    #[inline]
    fn into_seq(self) -> Option<&'a [S::Item]> {
        self.and_then(Seq::into_seq)
    }
}

impl<'a, T> SeqMut<'a> for &'a mut [T] {
    type Item = T;

    #[inline]
    fn into_seq_mut(self) -> Option<&'a mut [T]> {
        Some(self)
    }
}

impl<'a, T> SeqMut<'a> for &'a mut Vec<T> {
    type Item = T;

    #[inline]
    fn into_seq_mut(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T, const N: usize> SeqMut<'a> for &'a mut [T; N] {
    type Item = T;

    #[inline]
    fn into_seq_mut(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, S: SeqMut<'a>> SeqMut<'a> for Option<S> {
    type Item = S::Item;

    #[inline]
    fn into_seq_mut(self) -> Option<&'a mut [S::Item]> {
        self.and_then(SeqMut::into_seq_mut)
    }
}

impl<'a, K, V, H> Mapping<'a> for &'a HashMap<K, V, H> {
    type Key = K;
    type Value = V;
    type Iter = hash_map::Iter<'a, K, V>;

    #[inline]
    fn into_entries(self) -> Option<Self::Iter> {
        Some(self.iter())
    }
}

impl<'a, K, V> Mapping<'a> for &'a BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Iter = btree_map::Iter<'a, K, V>;

    #[inline]
    fn into_entries(self) -> Option<Self::Iter> {
        Some(self.iter())
    }
}

impl<'a, M: Mapping<'a>> Mapping<'a> for Option<M> {
    type Key = M::Key;
    type Value = M::Value;
    type Iter = M::Iter;

    #[inline]
    fn into_entries(self) -> Option<Self::Iter> {
        self.and_then(Mapping::into_entries)
    }
}
