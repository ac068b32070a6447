use crate::math::random::UniformSource;

/// Sharpen or flatten an acceptance ratio by the sampling temperature
///
/// Returns `ratio^(1/temperature)`. Temperatures above 1 pull ratios below 1
/// toward 1 (more random flips), temperatures below 1 push them toward 0
/// (greedier descent). A temperature of exactly 1 leaves the ratio untouched.
// Exactly 1.0 is the conventional untempered setting
#[allow(clippy::float_cmp)]
pub fn tempered_ratio(ratio: f64, temperature: f64) -> f64 {
    if temperature == 1.0 {
        ratio
    } else {
        ratio.powf(1.0 / temperature)
    }
}

/// Metropolis acceptance with temperature annealing
///
/// Ratios of at least 1 are accepted without consuming a random draw.
/// Otherwise the tempered ratio is compared against one draw from `rng`.
pub fn metropolis_accepts<R>(ratio: f64, temperature: f64, rng: &mut R) -> bool
where
    R: UniformSource + ?Sized,
{
    if ratio >= 1.0 {
        return true;
    }
    tempered_ratio(ratio, temperature) > rng.next_unit()
}
