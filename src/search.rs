#[allow(unused_imports)]
use micromath::F32Ext;

/// Returns the index of the entry in `values` closest to `target`.
///
/// `values` must be non-empty and sorted in strictly ascending order.
/// Targets below the first entry resolve to `0`, targets above the last
/// entry resolve to the last index. When `target` sits exactly halfway
/// between two entries the larger one wins.
pub fn nearest_index(values: &[f32], target: f32) -> usize {
    let mut low = 0;
    let mut high = values.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let value = values[mid];

        if target == value {
            return mid;
        } else if target > value {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    // `low` is now the first entry greater than `target`.
    let upper = low;

    if upper >= values.len() {
        return values.len().saturating_sub(1);
    }
    if upper == 0 {
        return 0;
    }

    let lower = upper - 1;
    if distance(target, values[upper]) <= distance(target, values[lower]) {
        upper
    } else {
        lower
    }
}

fn distance(a: f32, b: f32) -> f32 {
    (a - b).abs()
}
