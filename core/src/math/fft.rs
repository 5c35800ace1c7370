use crate::prelude::{Direction, TransformError, TransformResult};
use ndarray::{s, Array1, ArrayView1};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Recursive radix-2 decimation-in-time transform.
///
/// Forward and inverse passes run through the same recursion; only the
/// sign of the twiddle exponent changes with [`Direction`]. The even/odd
/// split at each level is a strided view into the caller's buffer, so the
/// input is never copied on the way down.
pub struct FastTransform;

impl FastTransform {
    /// Forward transform. The input length must be a power of two.
    pub fn forward(signal: &[Complex64]) -> TransformResult<Vec<Complex64>> {
        Self::process(signal, Direction::Forward)
    }

    pub fn forward_real(signal: &[f64]) -> TransformResult<Vec<Complex64>> {
        let lifted: Vec<Complex64> = signal.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        Self::forward(&lifted)
    }

    /// Normalised inverse transform, `inverse(forward(x)) ≈ x`.
    pub fn inverse(spectrum: &[Complex64]) -> TransformResult<Vec<Complex64>> {
        Self::process(spectrum, Direction::Inverse)
    }

    /// Runs one pass in `direction`, dividing by N on the inverse path.
    pub fn process(input: &[Complex64], direction: Direction) -> TransformResult<Vec<Complex64>> {
        let n = input.len();
        if !n.is_power_of_two() {
            log::warn!("rejecting {:?} transform of length {}", direction, n);
            return Err(TransformError::InvalidLength { len: n });
        }

        let output = butterfly(ArrayView1::from(input), direction);
        let output = match direction {
            Direction::Forward => output,
            Direction::Inverse => output / n as f64,
        };
        Ok(output.to_vec())
    }
}

/// Explicit zero padding up to the next power of two.
///
/// The fast path never pads on its own; callers that want to run a
/// non-conforming signal opt in through this function.
pub fn zero_pad_to_power_of_two<T: Clone + Default>(signal: &[T]) -> Vec<T> {
    let target = signal.len().next_power_of_two();
    let mut padded = signal.to_vec();
    padded.resize(target, T::default());
    padded
}

fn butterfly(input: ArrayView1<'_, Complex64>, direction: Direction) -> Array1<Complex64> {
    let n = input.len();
    if n <= 1 {
        return input.to_owned();
    }

    let even = butterfly(input.slice(s![..;2]), direction);
    let odd = butterfly(input.slice(s![1..;2]), direction);

    let half = n / 2;
    let mut output = Array1::from_elem(n, Complex64::new(0.0, 0.0));
    for k in 0..half {
        let twiddle = Complex64::from_polar(1.0, direction.sign() * 2.0 * PI * k as f64 / n as f64);
        let t = twiddle * odd[k];
        output[k] = even[k] + t;
        output[k + half] = even[k] - t;
    }
    output
}
