/// Mutable references to two distinct elements of a slice.
///
/// Panics if `i >= j` or `j` is out of bounds.
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert!(i < j, "pair indices must be ordered, got ({i}, {j})");

    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
