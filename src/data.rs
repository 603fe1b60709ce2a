use std::slice;

use ndarray::{arr1, Array1};
use ndarray_rand::rand::{seq::SliceRandom, Rng};

/// One training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub input: Array1<f64>,
    pub target: Array1<f64>,
}

impl Sample {
    pub fn new(input: Array1<f64>, target: Array1<f64>) -> Self {
        Self { input, target }
    }
}

/// Ordered collection of samples visited once per epoch.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// `size` points of `1 - x` for `x = 0, 1/size, ..., (size - 1)/size`.
    pub fn linear(size: usize) -> Self {
        let samples = (0..size)
            .map(|k| {
                let x = k as f64 / size as f64;
                Sample::new(arr1(&[x]), arr1(&[1.0 - x]))
            })
            .collect();
        Self { samples }
    }

    /// Reorder the samples in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.samples.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Evenly spaced inputs `0, 1/count, ..., (count - 1)/count` used to probe a
/// trained single-input network.
pub fn probe_inputs(count: usize) -> Vec<f64> {
    (0..count).map(|i| i as f64 / count as f64).collect()
}
