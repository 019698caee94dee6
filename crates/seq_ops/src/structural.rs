use crate::{Seq, SeqMut};

/// Overwrites every position `i` with `start <= i <= end` by `value`, in
/// place, and hands the same slice back.
///
/// Bounds are clipped to the slice, so out-of-range or inverted bounds write
/// nothing rather than panic. An absent sequence stays absent.
pub fn fill<'a, S>(seq: S, value: S::Item, start: isize, end: isize) -> Option<&'a mut [S::Item]>
where
    S: SeqMut<'a>,
    S::Item: Clone,
{
    let items = seq.into_seq_mut()?;
    if let Some((lo, hi)) = clip_inclusive(items.len(), start, end) {
        items[lo..=hi].fill(value);
    }
    Some(items)
}

/// Reverses the slice in place and hands the same slice back.
pub fn reverse<'a, S>(seq: S) -> Option<&'a mut [S::Item]>
where
    S: SeqMut<'a>,
{
    let items = seq.into_seq_mut()?;
    let len = items.len();
    let mut i = 0;
    while i < len / 2 {
        items.swap(i, len - 1 - i);
        i += 1;
    }
    Some(items)
}

/// Borrows a window of at most `n` elements starting at `start`.
///
/// - `start <= 0`: the first `n` elements if `0 < n < len`, else everything.
/// - `0 < start < len`: `n` elements from `start` if they fit and `n > 0`,
///   else everything from `start` on.
/// - `start >= len`: nothing.
///
/// Never panics. An absent sequence is treated as empty.
pub fn range<'a, S>(seq: S, start: isize, n: isize) -> &'a [S::Item]
where
    S: Seq<'a>,
{
    let items = seq.into_seq().unwrap_or_default();
    let len = items.len();

    if start <= 0 {
        return match usize::try_from(n) {
            Ok(n) if n > 0 && n < len => &items[..n],
            _ => items,
        };
    }

    let start = start.unsigned_abs();
    if start >= len {
        return &[];
    }
    match usize::try_from(n) {
        // `start < len <= isize::MAX` and `n <= isize::MAX`, so the sum fits.
        Ok(n) if n > 0 && start + n < len => &items[start..start + n],
        _ => &items[start..],
    }
}

/// Intersects `[start, end]` with `[0, len)`; `None` when that is empty.
fn clip_inclusive(len: usize, start: isize, end: isize) -> Option<(usize, usize)> {
    if len == 0 || end < 0 || start > end {
        return None;
    }
    let lo = start.max(0).unsigned_abs();
    let hi = end.unsigned_abs().min(len - 1);
    (lo <= hi).then_some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_inclusive_bounds() {
        let mut values = vec![0_u8; 6];
        fill(&mut values, 7, 1, 3);
        assert_eq!(values, [0, 7, 7, 7, 0, 0]);

        let mut values = vec![0_u8; 6];
        fill(&mut values, 7, 4, 4);
        assert_eq!(values, [0, 0, 0, 0, 7, 0]);
    }

    #[test]
    fn fill_clips_out_of_range() {
        let mut values = vec![1_i32, 2, 3, 4];
        fill(&mut values, 0, -5, 1);
        assert_eq!(values, [0, 0, 3, 4]);

        let mut values = vec![1_i32, 2, 3, 4];
        fill(&mut values, 0, 2, 100);
        assert_eq!(values, [1, 2, 0, 0]);

        let mut values = vec![1_i32, 2, 3, 4];
        fill(&mut values, 0, isize::MIN, isize::MAX);
        assert_eq!(values, [0, 0, 0, 0]);
    }

    #[test]
    fn fill_writes_nothing_for_disjoint_or_inverted_bounds() {
        let cases = [(3, 1), (-4, -1), (4, 9), (100, 200), (isize::MAX, isize::MIN)];
        for (start, end) in cases {
            let mut values = vec![1_i32, 2, 3, 4];
            fill(&mut values, 0, start, end);
            assert_eq!(values, [1, 2, 3, 4], "start={start} end={end}");
        }

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(fill(&mut empty, 0, 0, 10).map(|s| s.len()), Some(0));
    }

    #[test]
    fn fill_returns_same_slice_and_preserves_absence() {
        let mut values = vec![String::from("a"), String::from("b")];
        let ptr = values.as_ptr();
        let out = fill(&mut values, String::from("z"), 0, 0).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_eq!(out, ["z", "b"]);

        assert!(fill(None::<&mut Vec<String>>, String::new(), 0, 1).is_none());
    }

    #[test]
    fn reverse_known_cases() {
        let cases: [(&[u32], &[u32]); 5] = [
            (&[], &[]),
            (&[1], &[1]),
            (&[1, 2], &[2, 1]),
            (&[1, 2, 3], &[3, 2, 1]),
            (&[1, 2, 3, 4, 5, 6], &[6, 5, 4, 3, 2, 1]),
        ];
        for (input, expected) in cases {
            let mut values = input.to_vec();
            reverse(&mut values);
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn reverse_chains_and_preserves_absence() {
        let mut values = [1_u32, 2, 3, 4, 5];
        let twice = reverse(reverse(&mut values));
        assert_eq!(twice.map(|s| s.to_vec()), Some(vec![1, 2, 3, 4, 5]));
        assert!(reverse(None::<&mut [u32]>).is_none());
    }

    #[test]
    fn range_boundary_table() {
        let values = ['a', 'b', 'c', 'd'];
        let cases: [(isize, isize, &[char]); 10] = [
            (1, -100, &['b', 'c', 'd']),
            (1, 0, &['b', 'c', 'd']),
            (1, 100, &['b', 'c', 'd']),
            (-100, 1, &['a']),
            (0, 1, &['a']),
            (100, 1, &[]),
            (-100, -100, &['a', 'b', 'c', 'd']),
            (0, 0, &['a', 'b', 'c', 'd']),
            (100, 100, &[]),
            (1, 2, &['b', 'c']),
        ];
        for (start, n, expected) in cases {
            assert_eq!(range(&values, start, n), expected, "start={start} n={n}");
        }
    }

    #[test]
    fn range_extremes_do_not_panic() {
        let values = [1_u8, 2, 3, 4];
        assert_eq!(range(&values, 3, isize::MAX), &[4]);
        assert_eq!(range(&values, isize::MAX, isize::MAX), &[] as &[u8]);
        assert_eq!(range(&values, isize::MIN, isize::MIN), &values);
        assert_eq!(range(&values, 4, 1), &[] as &[u8]);
        assert_eq!(range(&values, 0, 4), &values);
        assert_eq!(range(&values, 2, 2), &[3, 4]);
        assert_eq!(range(None::<&[u8]>, 0, 2), &[] as &[u8]);
        assert_eq!(range(&[] as &[u8], -1, 3), &[] as &[u8]);
    }

    #[test]
    fn range_borrows_input() {
        let values = vec![10_u32, 20, 30];
        assert_eq!(range(&values, 0, 0).as_ptr(), values.as_ptr());
        assert_eq!(range(&values, 1, 1).as_ptr(), values[1..].as_ptr());
    }
}
