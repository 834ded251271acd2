//! Random helpers.  Every function takes the RNG by mutable reference so a
//! seeded generator makes a whole session reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform integer in `[min, max)`.
pub fn random_int(rng: &mut impl Rng, min: i32, max: i32) -> i32 {
    rng.gen_range(min..max)
}

/// Uniform float in `[0, 1)`.
pub fn random_unit(rng: &mut impl Rng) -> f32 {
    rng.gen::<f32>()
}

/// Uniformly pick one element; `None` for an empty slice.
pub fn random_choice<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}
