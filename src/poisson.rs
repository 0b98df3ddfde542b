use rand::Rng;

use crate::error::{Error, Result};

/// Draw one Poisson-distributed count with mean `lambda`.
///
/// Uses Knuth's multiplicative method: multiply uniform draws into a
/// running product until it falls to or below `exp(-lambda)`. Exact for
/// the Poisson distribution and needs only a uniform source.
///
/// # Arguments
/// * `lambda` - Distribution mean, must be >= 0
/// * `rng` - Uniform random source
///
/// # Returns
/// A non-negative count. `lambda == 0` always returns 0: the threshold is
/// `exp(0) = 1` and every uniform draw in [0, 1) is below it.
pub fn poisson<R: Rng>(lambda: f64, rng: &mut R) -> Result<u32> {
    if lambda < 0.0 {
        return Err(Error::InvalidLambda(lambda));
    }

    let threshold = (-lambda).exp();
    let mut k: u32 = 0;
    let mut p: f64 = 1.0;
    loop {
        k += 1;
        p *= rng.gen::<f64>();
        if p <= threshold {
            return Ok(k - 1);
        }
    }
}
