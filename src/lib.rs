//! Multilayer perceptron with sigmoid units trained by plain backpropagation,
//! plus the small harness that fits `1 - x` with it.

pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod loss;
pub mod network;
pub mod trainer;

pub use error::{NetworkError, Result};
pub use loss::mean_squared_error;
pub use network::{Network, Phase, DEFAULT_LEARNING_RATE};

#[macro_export]
macro_rules! assert_rel_eq_arr1 {
    ($actual:expr, $expected:expr, epsilon = $epsilon:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w, epsilon = $epsilon);
            });
    };
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}

#[macro_export]
macro_rules! assert_rel_eq_arr2 {
    ($actual:expr, $expected:expr, epsilon = $epsilon:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w, epsilon = $epsilon);
            });
    };
    ($actual:expr, $expected:expr) => {
        assert_eq!($actual.shape(), $expected.shape());
        ndarray::Zip::from(&$actual)
            .and(&$expected)
            .for_each(|v, w| {
                assert_relative_eq!(v, w);
            });
    };
}
