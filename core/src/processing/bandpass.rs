use crate::prelude::{FilterBand, SpectralStage, TransformResult};
use num_complex::Complex64;

/// Folded frequency index `min(k, N - k)` of bin `k` in an `n`-point spectrum.
pub fn folded_index(k: usize, n: usize) -> usize {
    if k <= n / 2 {
        k
    } else {
        n - k
    }
}

/// Symmetry-aware band-pass filter over a complex spectrum.
pub struct SpectralFilter;

impl SpectralFilter {
    /// Returns a copy of `spectrum` with every bin whose folded index falls
    /// outside `band` set to zero. A bin and its conjugate mirror share a
    /// folded index, so they are always kept or dropped together.
    pub fn bandpass(spectrum: &[Complex64], band: FilterBand) -> Vec<Complex64> {
        let n = spectrum.len();
        spectrum
            .iter()
            .enumerate()
            .map(|(k, &coefficient)| {
                if band.contains(folded_index(k, n)) {
                    coefficient
                } else {
                    Complex64::new(0.0, 0.0)
                }
            })
            .collect()
    }
}

/// Pipeline stage wrapping [`SpectralFilter::bandpass`].
pub struct BandPassStage {
    band: FilterBand,
}

impl BandPassStage {
    pub fn new(band: FilterBand) -> Self {
        Self { band }
    }
}

impl SpectralStage for BandPassStage {
    fn name(&self) -> &'static str {
        "bandpass"
    }

    fn apply(&self, input: &[Complex64]) -> TransformResult<Vec<Complex64>> {
        Ok(SpectralFilter::bandpass(input, self.band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fft::FastTransform;

    fn ramp_spectrum(n: usize) -> Vec<Complex64> {
        (0..n)
            .map(|k| Complex64::new(k as f64 + 1.0, -(k as f64)))
            .collect()
    }

    #[test]
    fn folded_index_mirrors_upper_half() {
        let folded: Vec<usize> = (0..8).map(|k| folded_index(k, 8)).collect();
        assert_eq!(folded, vec![0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn full_band_is_identity() {
        for n in [1, 2, 7, 16] {
            let spectrum = ramp_spectrum(n);
            assert_eq!(
                SpectralFilter::bandpass(&spectrum, FilterBand::full(n)),
                spectrum
            );
        }
    }

    #[test]
    fn inverted_band_zeroes_everything() {
        let spectrum = ramp_spectrum(16);
        let filtered = SpectralFilter::bandpass(&spectrum, FilterBand::new(4, 3));
        assert_eq!(filtered.len(), 16);
        assert!(filtered.iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn dc_kept_only_when_band_starts_at_zero() {
        let spectrum = ramp_spectrum(8);
        let with_dc = SpectralFilter::bandpass(&spectrum, FilterBand::new(0, 1));
        assert_eq!(with_dc[0], spectrum[0]);
        assert_eq!(with_dc[1], spectrum[1]);
        assert_eq!(with_dc[7], spectrum[7]);
        assert_eq!(with_dc[2].norm(), 0.0);

        let without_dc = SpectralFilter::bandpass(&spectrum, FilterBand::new(1, 1));
        assert_eq!(without_dc[0].norm(), 0.0);
    }

    #[test]
    fn bounds_past_nyquist_change_nothing() {
        let spectrum = ramp_spectrum(8);
        assert_eq!(
            SpectralFilter::bandpass(&spectrum, FilterBand::new(0, 1000)),
            spectrum
        );
        let filtered = SpectralFilter::bandpass(&spectrum, FilterBand::new(5, 1000));
        assert!(filtered.iter().all(|c| c.norm() == 0.0));
    }

    #[test]
    fn filtered_real_signal_stays_real() {
        let signal: Vec<f64> = (0..32).map(|t| ((t * t) % 7) as f64 - 3.0).collect();
        let spectrum = FastTransform::forward_real(&signal).unwrap();
        let filtered = SpectralFilter::bandpass(&spectrum, FilterBand::new(2, 9));
        let restored = FastTransform::inverse(&filtered).unwrap();
        assert!(restored.iter().all(|c| c.im.abs() < 1e-9));
    }

    #[test]
    fn stage_leaves_input_untouched() {
        let spectrum = ramp_spectrum(4);
        let snapshot = spectrum.clone();
        let stage = BandPassStage::new(FilterBand::new(2, 2));
        let filtered = stage.apply(&spectrum).unwrap();
        assert_eq!(spectrum, snapshot);
        assert_eq!(filtered[2], spectrum[2]);
        assert_eq!(filtered[1].norm(), 0.0);
        assert_eq!(stage.name(), "bandpass");
    }
}
