//! Span definitions per operation: full analysis, batch analysis, simulation, optimization.
//!
//! Callers must depend on the `tracing` crate themselves.

/// Create a full-analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($total_score:expr, $tier:expr) => {
        ::tracing::info_span!("costlens.analysis", total_score = $total_score, tier = %$tier)
    };
}

/// Create a batch-analysis span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        ::tracing::info_span!("costlens.batch", batch_size = $batch_size)
    };
}

/// Create a Monte Carlo span.
#[macro_export]
macro_rules! simulation_span {
    ($iterations:expr, $seed:expr) => {
        ::tracing::info_span!("costlens.simulation", iterations = $iterations, seed = $seed)
    };
}

/// Create a profit-optimization span.
#[macro_export]
macro_rules! optimization_span {
    ($base_cost:expr) => {
        ::tracing::debug_span!("costlens.optimization", base_cost = $base_cost)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "costlens.analysis";
    pub const BATCH: &str = "costlens.batch";
    pub const SIMULATION: &str = "costlens.simulation";
    pub const OPTIMIZATION: &str = "costlens.optimization";
}
