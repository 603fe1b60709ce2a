use ndarray::{ArrayView1, Zip};

use crate::error::{check_len, Result};

/// Mean of `(target - output)^2` over all elements.
/// Used by the training harness for reporting; the network never calls it.
pub fn mean_squared_error(target: ArrayView1<f64>, output: ArrayView1<f64>) -> Result<f64> {
    check_len(target.len(), output.len())?;
    if target.is_empty() {
        return Ok(0.0);
    }

    let n = target.len();
    let loss = Zip::from(&target)
        .and(&output)
        .fold(0.0, |loss, &target, &output| loss + (target - output).powi(2))
        / n as f64;
    Ok(loss)
}
