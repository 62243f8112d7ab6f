// engine/src/sampling/mod.rs
#![deny(unsafe_code)]

mod board;
mod selection;

/**
 * Seeded random boards and selection stacks.
 *
 * Stand-ins for the external grid source and selection predicates, used by the CLI rollout,
 * benchmarks and tests. Deterministic for a given RNG state.
 */
pub use board::{BoardSpec, random_grid};
pub use selection::{SelectionKind, color_components, random_selection};
