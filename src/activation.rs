/// Logistic function, bounded in (0, 1) for finite `x`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its own output.
/// `y` must already be `sigmoid(x)`, not the pre-activation.
pub fn sigmoid_prime(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use crate::assert_rel_eq_arr1;

    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    #[test]
    fn sigmoid_compute() {
        let x = arr1(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        let actual = x.mapv(sigmoid);
        let expected = arr1(&[
            0.1192029220221175,
            0.2689414213699951,
            0.5000000000000000,
            0.7310585786300049,
            0.8807970779778823,
        ]);
        assert_rel_eq_arr1!(actual, expected, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_prime_of_outputs() {
        let x = arr1(&[-2.0, -1.0, 0.0, 1.0, 2.0]);
        let actual = x.mapv(sigmoid).mapv(sigmoid_prime);
        let expected = arr1(&[
            0.1049935854035065,
            0.1966119332414819,
            0.2500000000000000,
            0.1966119332414819,
            0.1049935854035066,
        ]);
        assert_rel_eq_arr1!(actual, expected, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_is_bounded() {
        for &x in &[-30.0, -5.0, -1e-3, 0.0, 1e-3, 5.0, 30.0] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({}) = {}", x, y);
        }
    }

    #[test]
    fn sigmoid_prime_extremes() {
        assert_relative_eq!(sigmoid_prime(0.0), 0.0);
        assert_relative_eq!(sigmoid_prime(1.0), 0.0);
        assert_relative_eq!(sigmoid_prime(0.5), 0.25);

        for k in 0..=100 {
            let y = k as f64 / 100.0;
            assert!(sigmoid_prime(y) <= 0.25);
        }
    }
}
