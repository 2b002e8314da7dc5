mod grid;
mod shell;
mod simulator;
mod utils;

pub use grid::{grids_equal, Cell, Grid};
pub use shell::{render, Outcome, Shell};
pub use simulator::{Simulator, Step};
pub use utils::Config;
