//! Bounded k-combination enumeration for set and fish searches.

use tinyvec::ArrayVec;

/// Invokes `visit` for every k-combination of `items`, in lexicographic
/// order of indices.
///
/// `k` is at most 4 everywhere in the engine, so the scratch stack is a
/// small fixed array; the largest enumeration is C(9, 4) = 126 combos.
pub(crate) fn for_each_combination<F>(items: &[u8], k: usize, visit: &mut F)
where
    F: FnMut(&[u8]),
{
    debug_assert!(k <= 4);
    if items.len() < k {
        return;
    }
    let mut combo = ArrayVec::<[u8; 4]>::new();
    recurse(items, k, 0, &mut combo, visit);
}

fn recurse<F>(items: &[u8], k: usize, start: usize, combo: &mut ArrayVec<[u8; 4]>, visit: &mut F)
where
    F: FnMut(&[u8]),
{
    if combo.len() == k {
        visit(combo.as_slice());
        return;
    }
    let need = k - combo.len();
    for i in start..=(items.len() - need) {
        combo.push(items[i]);
        recurse(items, k, i + 1, combo, visit);
        combo.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(items: &[u8], k: usize) -> Vec<Vec<u8>> {
        let mut combos = Vec::new();
        for_each_combination(items, k, &mut |combo| combos.push(combo.to_vec()));
        combos
    }

    #[test]
    fn test_pairs() {
        assert_eq!(
            collect(&[1, 2, 3], 2),
            vec![vec![1, 2], vec![1, 3], vec![2, 3]]
        );
    }

    #[test]
    fn test_counts() {
        assert_eq!(collect(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 4).len(), 126);
        assert_eq!(collect(&[0, 1, 2, 3, 4, 5, 6, 7, 8], 2).len(), 36);
    }

    #[test]
    fn test_short_input_yields_nothing() {
        assert!(collect(&[1, 2], 3).is_empty());
    }

    #[test]
    fn test_full_width_combination() {
        assert_eq!(collect(&[7, 8], 2), vec![vec![7, 8]]);
    }
}
