// grid_dsl_cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use clap::Parser;
use env_logger::Env;

use crate::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};
use grid_dsl_engine::{BoardSpec, SelectionKind, Transform};

#[derive(Parser, Debug)]
#[command(name = "grid_dsl_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Number of random (grid, selection, transform) applications.
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// Base RNG seed. If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    // ---------------- board sampling ----------------
    #[arg(long, default_value_t = 10)]
    rows: usize,

    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Maximum selection layers per step.
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// Board colours are drawn from 0..colors.
    #[arg(long, default_value_t = 10)]
    colors: i32,

    /// Selection family: rect | shapes | scatter | mixed
    #[arg(long, default_value = "mixed")]
    selection: String,

    /**
     * Comma-separated transform names to sample from. Omit to use every transform.
     * Example:
     *   --transforms rotate,flipv,cut_sum
     */
    #[arg(long)]
    transforms: Option<String>,

    // ---------------- visualization ----------------
    /**
     * Render input and first output layer as ASCII every step; value is sleep in ms.
     * Omit to disable rendering.
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N steps (only used with --verbosity 2).
    #[arg(long, default_value_t = 2000)]
    report_every: u64,
}

fn parse_transforms(list: Option<&str>) -> Result<Vec<&'static str>, String> {
    let Some(list) = list else {
        return Ok(Transform::all_names().collect());
    };
    let mut names = Vec::new();
    for raw in list.split(',').filter(|s| !s.trim().is_empty()) {
        let key = raw.trim().to_ascii_lowercase();
        let name = Transform::all_names()
            .find(|n| *n == key)
            .ok_or_else(|| format!("unknown transform {raw:?}"))?;
        names.push(name);
    }
    if names.is_empty() {
        return Err("--transforms is empty".to_string());
    }
    Ok(names)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let base_seed = args.seed.unwrap_or(12345);

    let transforms = match parse_transforms(args.transforms.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(2);
        }
    };

    // None => pick a family per step.
    let selection = match args.selection.as_str() {
        "mixed" => None,
        other => match SelectionKind::from_cli(other) {
            Some(kind) => Some(kind),
            None => {
                log::error!("unknown selection family {other:?}");
                std::process::exit(2);
            }
        },
    };

    if args.rows == 0 || args.cols == 0 || args.layers == 0 || args.colors < 1 {
        log::error!("--rows, --cols, --layers and --colors must be positive");
        std::process::exit(2);
    }
    let mut board = BoardSpec::new(args.rows, args.cols);
    board.colors = args.colors;

    log::info!(
        "sampling {} steps on {}x{} boards from {} transforms (seed={})",
        args.steps,
        args.rows,
        args.cols,
        transforms.len(),
        base_seed
    );

    let cfg = RunnerConfig {
        steps: args.steps,
        base_seed,
        board,
        max_layers: args.layers,
        selection,
        transforms,
        render_ms: args.render,
        verbosity: args.verbosity,
        report_every: args.report_every,
    };

    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run();

    println!(
        "DONE: steps_done={} elapsed={:.3}s steps/s={:.1} applied={} rejected={} unchanged_frac={:.3} avg_layers={:.2} avg_changed_cells={:.2} per_transform=[{}]",
        report.steps_done,
        report.elapsed_s,
        report.steps_per_s,
        report.applied,
        report.rejected,
        report.unchanged_frac,
        report.avg_layers,
        report.avg_changed_cells,
        report.per_transform_summary(),
    );
}
