use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::engine::RiskEngine;
use crate::error::RiskResult;
use crate::io::TranscriptSource;
use crate::models::RiskAnalysis;
use crate::report::SkippedTranscript;

/// Result of analyzing every transcript a source lists
#[derive(Debug)]
pub struct BatchOutcome {
    /// Correlates the rendered report with the run's log lines
    pub run_id: Uuid,
    /// Successful analyses, in listing order
    pub analyses: Vec<RiskAnalysis>,
    /// Transcripts that failed to load, in listing order
    pub skipped: Vec<SkippedTranscript>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.analyses.len() + self.skipped.len()
    }
}

/// Analyze all transcripts of a source concurrently
///
/// Listing failures abort the run. A transcript that cannot be loaded is
/// recorded in `skipped` and the rest of the batch continues.
pub async fn analyze_source<S>(engine: &RiskEngine, source: Arc<S>) -> RiskResult<BatchOutcome>
where
    S: TranscriptSource + 'static,
{
    let run_id = Uuid::new_v4();
    let span = info_span!("batch", %run_id);

    run_batch(engine, source, run_id).instrument(span).await
}

async fn run_batch<S>(engine: &RiskEngine, source: Arc<S>, run_id: Uuid) -> RiskResult<BatchOutcome>
where
    S: TranscriptSource + 'static,
{
    let ids = source.list()?;
    info!("Analyzing {} transcripts", ids.len());

    let mut tasks = JoinSet::new();
    for (index, source_id) in ids.iter().cloned().enumerate() {
        let engine = engine.clone();
        let source = Arc::clone(&source);
        tasks.spawn_blocking(move || {
            let result = source
                .load(&source_id)
                .map(|record| engine.analyze(&record, &source_id));
            (index, result)
        });
    }

    let mut slots: Vec<Option<Result<RiskAnalysis, SkippedTranscript>>> = vec![None; ids.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, Ok(analysis))) => slots[index] = Some(Ok(analysis)),
            Ok((index, Err(e))) => {
                warn!("Skipping {}: {}", ids[index], e);
                slots[index] = Some(Err(SkippedTranscript {
                    source_id: ids[index].clone(),
                    reason: e.to_string(),
                }));
            }
            Err(e) => warn!("Analysis task failed: {}", e),
        }
    }

    let mut analyses = Vec::new();
    let mut skipped = Vec::new();
    for (source_id, slot) in ids.into_iter().zip(slots) {
        match slot {
            Some(Ok(analysis)) => analyses.push(analysis),
            Some(Err(skip)) => skipped.push(skip),
            None => skipped.push(SkippedTranscript {
                source_id,
                reason: "analysis task failed".to_string(),
            }),
        }
    }

    info!(
        "Batch complete: {} analyzed, {} skipped",
        analyses.len(),
        skipped.len()
    );

    Ok(BatchOutcome {
        run_id,
        analyses,
        skipped,
    })
}
