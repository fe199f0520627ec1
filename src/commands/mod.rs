//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod game;
pub mod interactive;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use game::run_game;
pub use interactive::run_interactive;
pub use solve::{SolveConfig, SolveResult, solve_secret};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
