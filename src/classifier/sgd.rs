//! Binary logistic-regression scorer trained with stochastic gradient descent
//!
//! Each scorer is a weight vector over the frozen vocabulary plus a bias. Training
//! runs whole epochs over the samples in order and stops once the mean log loss has
//! not improved by more than `tol` for `n_iter_no_change` consecutive epochs.

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// SGD hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SgdParams {
    /// L2 regularization strength
    pub alpha: f64,
    /// Initial learning rate
    pub eta0: f64,
    /// Exponent of the inverse-scaling learning rate
    pub power_t: f64,
    /// Minimum mean-loss improvement that counts as progress
    pub tol: f64,
    /// Epochs without progress before the fit is considered converged
    pub n_iter_no_change: usize,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            alpha: 1e-4,
            eta0: 0.01,
            power_t: 0.25,
            tol: 1e-3,
            n_iter_no_change: 5,
        }
    }
}

/// Result of one bounded fit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitOutcome {
    pub epochs: usize,
    pub converged: bool,
}

impl FitOutcome {
    /// Combine outcomes of independent scorers: converged only if all converged
    pub fn merge(self, other: FitOutcome) -> FitOutcome {
        FitOutcome {
            epochs: self.epochs.max(other.epochs),
            converged: self.converged && other.converged,
        }
    }

    /// Outcome of fitting nothing
    pub fn trivial() -> FitOutcome {
        FitOutcome {
            epochs: 0,
            converged: true,
        }
    }
}

/// Smallest weight scale tolerated before it is folded back into the weights
const MIN_SCALE: f64 = 1e-9;

/// Linear scorer `w . x + b`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScorer {
    weights: Vec<f64>,
    bias: f64,
    /// Updates applied so far; drives the learning-rate schedule across partial fits
    steps: u64,
}

impl LinearScorer {
    pub fn new(n_features: usize) -> Self {
        Self {
            weights: vec![0.0; n_features],
            bias: 0.0,
            steps: 0,
        }
    }

    pub fn decision(&self, x: &FeatureVector) -> f64 {
        x.dot(&self.weights) + self.bias
    }

    /// Run up to `max_iter` epochs over `(x, y)`, continuing from the current weights
    pub fn fit_epochs(
        &mut self,
        x: &[FeatureVector],
        y: &[bool],
        params: &SgdParams,
        max_iter: usize,
    ) -> FitOutcome {
        if x.is_empty() {
            return FitOutcome::trivial();
        }

        let n = x.len() as f64;
        let mut best_loss = f64::INFINITY;
        let mut no_improvement = 0;
        // Weights are stored as `scale * weights` during training so L2 decay is O(1)
        let mut scale = 1.0;

        for epoch in 1..=max_iter {
            let mut loss_sum = 0.0;

            for (sample, &target) in x.iter().zip(y) {
                let target = if target { 1.0 } else { -1.0 };
                let eta = params.eta0 / ((self.steps + 1) as f64).powf(params.power_t);
                self.steps += 1;

                let margin = target * (scale * sample.dot(&self.weights) + self.bias);
                loss_sum += log_loss(margin);
                let gradient = -target * sigmoid(-margin);

                scale *= 1.0 - eta * params.alpha;
                if scale < MIN_SCALE {
                    self.fold_scale(scale);
                    scale = 1.0;
                }

                let step = eta * gradient / scale;
                for &(i, value) in sample.entries() {
                    if let Some(w) = self.weights.get_mut(i) {
                        *w -= step * value;
                    }
                }
                self.bias -= eta * gradient;
            }

            let mean_loss = loss_sum / n;
            if mean_loss > best_loss - params.tol {
                no_improvement += 1;
            } else {
                no_improvement = 0;
            }
            best_loss = best_loss.min(mean_loss);

            if no_improvement >= params.n_iter_no_change {
                self.fold_scale(scale);
                return FitOutcome {
                    epochs: epoch,
                    converged: true,
                };
            }
        }

        self.fold_scale(scale);
        FitOutcome {
            epochs: max_iter,
            converged: false,
        }
    }

    fn fold_scale(&mut self, scale: f64) {
        if scale != 1.0 {
            for w in &mut self.weights {
                *w *= scale;
            }
        }
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + e^-margin)`, stable for large magnitudes
fn log_loss(margin: f64) -> f64 {
    if margin > 18.0 {
        (-margin).exp()
    } else if margin < -18.0 {
        -margin
    } else {
        (-margin).exp().ln_1p()
    }
}
