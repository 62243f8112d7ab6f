// engine/src/sampling/board.rs
#![deny(unsafe_code)]

use ndarray::Array2;
use rand::Rng;

use crate::ops::{Color, Grid};

/// Shape and palette of a random board.
#[derive(Clone, Copy, Debug)]
pub struct BoardSpec {
    pub rows: usize,
    pub cols: usize,
    /// Colours are drawn from `[0, colors)`; 0 is the background.
    pub colors: Color,
    /// Probability in [0,1] that a cell is foreground (non-zero).
    pub density: f64,
}

impl BoardSpec {
    pub const DEFAULT_DENSITY: f64 = 0.35;

    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            colors: 10,
            density: Self::DEFAULT_DENSITY,
        }
    }
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

/// Random board: background 0 plus foreground colours in `[1, colors)`.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, spec: &BoardSpec) -> Grid {
    let p = spec.density.clamp(0.0, 1.0);
    let max_color = spec.colors.max(2);
    Array2::from_shape_simple_fn((spec.rows, spec.cols), || {
        if rng.gen_bool(p) {
            rng.gen_range(1..max_color)
        } else {
            0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_board() {
        let spec = BoardSpec::new(6, 9);
        let a = random_grid(&mut StdRng::seed_from_u64(7), &spec);
        let b = random_grid(&mut StdRng::seed_from_u64(7), &spec);
        assert_eq!(a, b);
        assert_eq!(a.dim(), (6, 9));
        assert!(a.iter().all(|&v| (0..10).contains(&v)));
    }

    #[test]
    fn zero_density_is_all_background() {
        let spec = BoardSpec {
            density: 0.0,
            ..BoardSpec::new(3, 3)
        };
        let g = random_grid(&mut StdRng::seed_from_u64(1), &spec);
        assert!(g.iter().all(|&v| v == 0));
    }
}
