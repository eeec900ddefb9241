//! Parallel batch analysis.

use rayon::prelude::*;

use costlens_core::config::CostlensConfig;
use costlens_core::EstimationResult;

use super::{AnalysisReport, EstimationPipeline, FullAnalysisRequest};

impl EstimationPipeline {
    /// Analyse every request in parallel. Results keep input order and each
    /// fails independently.
    pub fn analyze_batch(
        &self,
        requests: &[FullAnalysisRequest],
    ) -> Vec<EstimationResult<AnalysisReport>> {
        let span = costlens_core::batch_span!(requests.len());
        let _guard = span.enter();

        let results: Vec<_> = requests.par_iter().map(|r| self.analyze(r)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(total = requests.len(), failed, "batch analysis complete");
        results
    }
}

/// Batch analysis with an explicit config.
pub fn analyze_batch(
    requests: &[FullAnalysisRequest],
    config: &CostlensConfig,
) -> Vec<EstimationResult<AnalysisReport>> {
    EstimationPipeline::new(config.clone()).analyze_batch(requests)
}
