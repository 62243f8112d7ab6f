// grid_dsl_cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_dsl_engine::{BoardSpec, Grid, SelectionKind, Transform, random_grid, random_selection};

use super::render::render_pair;
use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};

/// Fixed internal cadence for progress-bar live message updates.
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    pub steps: u64,
    pub base_seed: u64,

    // ---------------- sampling ----------------
    pub board: BoardSpec,
    pub max_layers: usize,
    /// `None` draws a selection family per step.
    pub selection: Option<SelectionKind>,
    /// Transform names to draw from; never empty.
    pub transforms: Vec<&'static str>,

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N steps (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every step; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,
}

/// Random integer arguments for `name`, spread over valid and invalid values so both the
/// apply and the reject paths get exercised.
fn sample_args(rng: &mut StdRng, name: &str, board: &BoardSpec) -> Vec<i64> {
    let span = board.rows.max(board.cols) as i64;
    match name {
        "rotate" => vec![rng.gen_range(0..=4)],
        "vupscale" | "hupscale" => vec![rng.gen_range(0..=4)],
        "color"
        | "fill_with_color"
        | "fill_bounding_rectangle_with_color"
        | "fill_bounding_square_with_color"
        | "change_background_color" => vec![rng.gen_range(0..i64::from(board.colors.max(1)))],
        "copy_paste" | "copy_sum" | "cut_paste" | "cut_sum" => {
            vec![rng.gen_range(-span..=span), rng.gen_range(-span..=span)]
        }
        _ => Vec::new(),
    }
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self) -> FinalReport {
        let cfg = self.cfg.clone();
        let mut rng = StdRng::seed_from_u64(cfg.base_seed);

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.steps);
            let style = ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
            pb.set_style(style);
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();

        while stats.steps_done < cfg.steps {
            let grid: Grid = random_grid(&mut rng, &cfg.board);
            let kind = cfg
                .selection
                .unwrap_or_else(|| SelectionKind::ALL[rng.gen_range(0..SelectionKind::ALL.len())]);
            let selection = random_selection(&mut rng, grid.view(), kind, cfg.max_layers);

            let name = cfg.transforms[rng.gen_range(0..cfg.transforms.len())];
            let args = sample_args(&mut rng, name, &cfg.board);

            let outcome = Transform::from_name(name, &args)
                .and_then(|t| t.try_apply(grid.view(), selection.view()));
            match &outcome {
                Ok(out) => stats.on_applied(name, &grid, out),
                Err(e) => {
                    log::debug!("step {}: {name}{args:?} rejected: {e}", stats.steps_done);
                    stats.on_rejected(name);
                }
            }

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            if let Some(ms) = cfg.render_ms {
                println!(
                    "step={} transform={name} args={args:?} selection={kind:?} layers={}",
                    stats.steps_done,
                    selection.len_of(Axis(0)),
                );
                match &outcome {
                    Ok(out) if out.len_of(Axis(0)) > 0 => {
                        print!("{}", render_pair(grid.view(), out.index_axis(Axis(0), 0)));
                    }
                    Ok(_) => println!("(no candidate layers)"),
                    Err(e) => println!("(rejected: {e})"),
                }
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }

            // Periodic table report (verbosity == 2 only).
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.steps_done % cfg.report_every == 0)
            {
                let row = ReportRow {
                    step: stats.steps_done,
                    steps_total: cfg.steps,
                    sps: stats.steps_per_sec(),
                    applied: stats.applied,
                    rejected: stats.rejected,
                    unchanged_frac: stats.unchanged_frac(),
                    avg_layers: stats.avg_layers(),
                    avg_changed_cells: stats.avg_changed_cells(),
                    top_transform: stats.top_transform(),
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }

            if cfg.verbosity >= 1 && (stats.steps_done % LIVE_EVERY == 0) {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg());
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        stats.final_report()
    }
}
