use std::collections::BTreeMap;

/// Count occurrences of each code and keep those that appear more than
/// once. In [1, 1, 2, 3, 3, 3, 3, 4, 5] the duplicates are {1: 2, 3: 4}.
pub fn duplicate_codes(codes: &[u32]) -> BTreeMap<u32, usize> {
    let mut count: BTreeMap<u32, usize> = BTreeMap::new();
    for &code in codes {
        *count.entry(code).or_insert(0) += 1;
    }
    count.retain(|_, n| *n > 1);
    count
}
