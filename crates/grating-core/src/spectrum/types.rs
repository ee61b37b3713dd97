use serde::{Deserialize, Serialize};

use crate::error::{GratingError, Result};

/// One point of a measured spectrum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WavelengthSample {
    /// Nanometers. Never rounded; distinct scan offsets stay distinct keys.
    pub wavelength: f64,
    pub amplitude: f64,
}

/// Wavelength -> amplitude profile in increasing-wavelength order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    samples: Vec<WavelengthSample>,
    max_amplitude: f64,
}

impl Spectrum {
    /// Build from samples already in increasing-wavelength order.
    pub fn from_samples(samples: Vec<WavelengthSample>) -> Self {
        let max_amplitude = samples
            .iter()
            .fold(0.0_f64, |max, s| max.max(s.amplitude));
        Self {
            samples,
            max_amplitude,
        }
    }

    pub fn samples(&self) -> &[WavelengthSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WavelengthSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest amplitude seen, or 0.0 for an empty spectrum.
    pub fn max_amplitude(&self) -> f64 {
        self.max_amplitude
    }

    /// Amplitude recorded at exactly `wavelength`.
    pub fn get(&self, wavelength: f64) -> Option<f64> {
        self.samples
            .iter()
            .find(|s| s.wavelength == wavelength)
            .map(|s| s.amplitude)
    }

    /// Sample with the largest amplitude; the shortest wavelength wins ties.
    pub fn peak(&self) -> Option<WavelengthSample> {
        self.samples
            .iter()
            .copied()
            .reduce(|best, s| if s.amplitude > best.amplitude { s } else { best })
    }

    /// Scale every amplitude by `1 / max_amplitude`, giving values in (0, 1].
    ///
    /// Fails with [`GratingError::EmptySpectrum`] when nothing was detected.
    pub fn normalize(&self) -> Result<Spectrum> {
        if self.max_amplitude <= 0.0 {
            return Err(GratingError::EmptySpectrum);
        }
        let max = self.max_amplitude;
        let samples = self
            .samples
            .iter()
            .map(|s| WavelengthSample {
                wavelength: s.wavelength,
                amplitude: s.amplitude / max,
            })
            .collect();
        Ok(Spectrum::from_samples(samples))
    }
}

impl<'a> IntoIterator for &'a Spectrum {
    type Item = &'a WavelengthSample;
    type IntoIter = std::slice::Iter<'a, WavelengthSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
