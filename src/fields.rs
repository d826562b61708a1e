//! Canonical Reference Fields
//!
//! Deterministic (seeded) fields spanning the range from no structure to
//! rigid order, used to calibrate and compare the measures:
//!
//! | Field          | Expected signature                          |
//! |----------------|---------------------------------------------|
//! | uniform        | zero everywhere                             |
//! | checkerboard   | H = 1 bit, MI = 1 bit, one block pattern    |
//! | random noise   | high H, MI ≈ 0                              |
//! | Game of Life   | intermediate: sparse, locally correlated    |

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{InfoError, Result};

/// Constant field
pub fn uniform(size: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((size, size), value)
}

/// Binary checkerboard, 1 on cells with even `i + j`
pub fn checkerboard(size: usize) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(i, j)| if (i + j) % 2 == 0 { 1.0 } else { 0.0 })
}

/// Independent uniform samples in `[0, 1)`
pub fn random_noise(size: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((size, size), |_| rng.random::<f64>())
}

/// Independent fair-coin cells
pub fn random_binary(size: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((size, size), |_| if rng.random_bool(0.5) { 1.0 } else { 0.0 })
}

/// Independent normal samples with the given standard deviation
pub fn gaussian_noise(size: usize, std_dev: f64, seed: u64) -> Result<Array2<f64>> {
    if !(std_dev.is_finite() && std_dev > 0.0) {
        return Err(InfoError::invalid(format!("std_dev must be positive and finite, got {}", std_dev)));
    }
    let normal = Normal::new(0.0, std_dev).map_err(|e| InfoError::invalid(e.to_string()))?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Array2::from_shape_fn((size, size), |_| normal.sample(&mut rng)))
}

/// Conway's Game of Life on a torus, evolved `steps` generations from a random start
pub fn game_of_life(size: usize, steps: usize, seed: u64) -> Array2<f64> {
    let mut grid = random_binary(size, seed);
    for _ in 0..steps {
        grid = life_step(&grid);
    }
    grid
}

fn life_step(grid: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = grid.dim();
    Array2::from_shape_fn((rows, cols), |(i, j)| {
        let mut neighbours = 0;
        for di in [rows - 1, 0, 1] {
            for dj in [cols - 1, 0, 1] {
                if di == 0 && dj == 0 {
                    continue;
                }
                if grid[[(i + di) % rows, (j + dj) % cols]] > 0.5 {
                    neighbours += 1;
                }
            }
        }
        let alive = grid[[i, j]] > 0.5;
        match (alive, neighbours) {
            (true, 2) | (true, 3) | (false, 3) => 1.0,
            _ => 0.0,
        }
    })
}

/// Fair-coin time series
pub fn random_binary_series(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| if rng.random_bool(0.5) { 1.0 } else { 0.0 }).collect()
}

/// `target[t] = source[t - lag]`, with the first `lag` samples set to 0
pub fn lagged_copy(source: &[f64], lag: usize) -> Vec<f64> {
    let mut target = vec![0.0; source.len()];
    if lag < source.len() {
        target[lag..].copy_from_slice(&source[..source.len() - lag]);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard_balanced() {
        let field = checkerboard(4);
        assert_eq!(field.sum(), 8.0);
        assert_eq!(field[[0, 0]], 1.0);
        assert_eq!(field[[0, 1]], 0.0);
    }

    #[test]
    fn test_seeded_fields_reproducible() {
        assert_eq!(random_noise(8, 3), random_noise(8, 3));
        assert_ne!(random_noise(8, 3), random_noise(8, 4));
        assert_eq!(game_of_life(16, 5, 1), game_of_life(16, 5, 1));
    }

    #[test]
    fn test_gaussian_rejects_bad_std() {
        assert!(gaussian_noise(4, -1.0, 0).is_err());
        assert!(gaussian_noise(4, f64::NAN, 0).is_err());
        assert_eq!(gaussian_noise(4, 1.0, 0).unwrap().dim(), (4, 4));
    }

    #[test]
    fn test_life_blinker() {
        let mut grid = Array2::zeros((5, 5));
        grid[[2, 1]] = 1.0;
        grid[[2, 2]] = 1.0;
        grid[[2, 3]] = 1.0;

        let next = life_step(&grid);
        assert_eq!(next[[1, 2]], 1.0);
        assert_eq!(next[[2, 2]], 1.0);
        assert_eq!(next[[3, 2]], 1.0);
        assert_eq!(next.sum(), 3.0);
        assert_eq!(life_step(&next), grid);
    }

    #[test]
    fn test_lagged_copy() {
        assert_eq!(lagged_copy(&[1.0, 2.0, 3.0], 1), vec![0.0, 1.0, 2.0]);
        assert_eq!(lagged_copy(&[1.0, 2.0], 5), vec![0.0, 0.0]);
    }
}
