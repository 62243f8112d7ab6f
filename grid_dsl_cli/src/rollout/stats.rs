// grid_dsl_cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::time::Instant;

use grid_dsl_engine::{Color, Grid, GridStack};
use ndarray::Axis;

/// Per-transform counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformCounts {
    pub applied: u64,
    pub rejected: u64,
    pub unchanged: u64,
}

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub steps_done: u64,
    pub applied: u64,
    pub rejected: u64,
    pub unchanged: u64,

    pub sum_layers: u64,
    pub sum_changed_cells: u64,

    pub per_transform: BTreeMap<&'static str, TransformCounts>,

    t0: Instant,
}

/// Cells that differ between `grid` and `layer`. Cells a reshaped layer adds beyond the grid
/// count only when non-zero.
fn changed_cells(grid: &Grid, layer: ndarray::ArrayView2<'_, Color>) -> u64 {
    let (rows, cols) = grid.dim();
    layer
        .indexed_iter()
        .filter(|&((r, c), &v)| {
            if r < rows && c < cols {
                v != grid[[r, c]]
            } else {
                v != 0
            }
        })
        .count() as u64
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            steps_done: 0,
            applied: 0,
            rejected: 0,
            unchanged: 0,
            sum_layers: 0,
            sum_changed_cells: 0,
            per_transform: BTreeMap::new(),
            t0: Instant::now(),
        }
    }

    /// Call once per successful application.
    pub fn on_applied(&mut self, name: &'static str, grid: &Grid, out: &GridStack) {
        self.steps_done += 1;
        self.applied += 1;

        let layers = out.len_of(Axis(0)) as u64;
        self.sum_layers += layers;

        let changed: u64 = out
            .axis_iter(Axis(0))
            .map(|layer| changed_cells(grid, layer))
            .sum();
        self.sum_changed_cells += changed;

        let entry = self.per_transform.entry(name).or_default();
        entry.applied += 1;
        if changed == 0 {
            self.unchanged += 1;
            entry.unchanged += 1;
        }
    }

    /// Call when `try_apply` refuses the invocation.
    pub fn on_rejected(&mut self, name: &'static str) {
        self.steps_done += 1;
        self.rejected += 1;
        self.per_transform.entry(name).or_default().rejected += 1;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn steps_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.steps_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn unchanged_frac(&self) -> f64 {
        if self.applied > 0 {
            self.unchanged as f64 / self.applied as f64
        } else {
            0.0
        }
    }

    pub fn avg_layers(&self) -> f64 {
        if self.applied > 0 {
            self.sum_layers as f64 / self.applied as f64
        } else {
            0.0
        }
    }

    pub fn avg_changed_cells(&self) -> f64 {
        if self.applied > 0 {
            self.sum_changed_cells as f64 / self.applied as f64
        } else {
            0.0
        }
    }

    /// Most applied transform; ties go to the alphabetically first name.
    pub fn top_transform(&self) -> &'static str {
        self.per_transform
            .iter()
            .max_by(|(na, a), (nb, b)| a.applied.cmp(&b.applied).then(nb.cmp(na)))
            .map(|(name, _)| *name)
            .unwrap_or("-")
    }

    pub fn live_msg(&self) -> String {
        format!(
            "sps={:.1} applied={} rejected={} unch={:.1}% layers={:.2} changed={:.2}",
            self.steps_per_sec(),
            self.applied,
            self.rejected,
            self.unchanged_frac() * 100.0,
            self.avg_layers(),
            self.avg_changed_cells(),
        )
    }

    pub fn final_report(&self) -> FinalReport {
        FinalReport {
            steps_done: self.steps_done,
            elapsed_s: self.elapsed_secs(),
            steps_per_s: self.steps_per_sec(),
            applied: self.applied,
            rejected: self.rejected,
            unchanged_frac: self.unchanged_frac(),
            avg_layers: self.avg_layers(),
            avg_changed_cells: self.avg_changed_cells(),
            per_transform: self.per_transform.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub steps_done: u64,
    pub elapsed_s: f64,
    pub steps_per_s: f64,

    pub applied: u64,
    pub rejected: u64,
    pub unchanged_frac: f64,

    pub avg_layers: f64,
    pub avg_changed_cells: f64,

    pub per_transform: BTreeMap<&'static str, TransformCounts>,
}

impl FinalReport {
    /// `name:applied/rejected/unchanged` for every transform seen, sorted by name.
    pub fn per_transform_summary(&self) -> String {
        self.per_transform
            .iter()
            .map(|(name, c)| format!("{name}:{}/{}/{}", c.applied, c.rejected, c.unchanged))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
