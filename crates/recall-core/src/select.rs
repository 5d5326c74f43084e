use crate::DeterministicRng;

/// Pick one of `candidates` with probability proportional to its weight.
///
/// Draws `p` uniformly from `[0, total)` and walks the candidates in order,
/// subtracting each weight, until `p` drops to zero or below. Earlier
/// candidates win ties. Returns `None` only for an empty slice.
///
/// Panics if the weights do not sum to a positive finite value: stored plans
/// are evicted before their weight reaches zero, so that indicates a bug.
pub fn select_weighted<T: Copy>(
    candidates: &[(T, f64)],
    rng: &mut impl DeterministicRng,
) -> Option<T> {
    let (last, _) = *candidates.last()?;

    let total: f64 = candidates.iter().map(|(_, w)| *w).sum();
    assert!(
        total.is_finite() && total > 0.0,
        "weighted selection over non-positive total weight {total}"
    );

    let mut p = rng.next_f64_unit() * total;
    for &(item, weight) in candidates {
        p -= weight;
        if p <= 0.0 {
            return Some(item);
        }
    }
    // Rounding can leave a sliver above zero after the last subtraction.
    Some(last)
}
