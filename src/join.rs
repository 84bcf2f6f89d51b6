use std::collections::HashMap;
use std::hash::Hash;

pub fn left_join<L, R, K>(
    left: Vec<L>,
    right: &[R],
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
) -> Vec<(L, Option<R>)>
where
    L: Clone,
    R: Clone,
    K: Eq + Hash,
{
    let mut index: HashMap<K, Vec<usize>> = HashMap::with_capacity(right.len());
    for (idx, row) in right.iter().enumerate() {
        index.entry(right_key(row)).or_default().push(idx);
    }

    let mut out = Vec::with_capacity(left.len());
    for row in left {
        match index.get(&left_key(&row)) {
            Some(hits) => {
                for &idx in hits {
                    out.push((row.clone(), Some(right[idx].clone())));
                }
            }
            None => out.push((row, None)),
        }
    }
    out
}
