use super::Roller;

/// Fisher-Yates shuffle: puts `items` into a uniformly random order.
///
/// Walks from the last position down to the second, swapping each item with
/// one at or before it.
pub fn shuffle<T, R: Roller>(items: &mut [T], roller: &mut R) {
    for i in (1..items.len()).rev() {
        let j = roller.pick(i + 1);
        items.swap(i, j);
    }
}
