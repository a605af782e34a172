use crate::core::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: String,
    pub rows: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Any stage error aborts
    /// the run; nothing is retried or resumed.
    pub fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting ETL process...");

        tracing::info!("Extracting declaration block...");
        let block = self.pipeline.extract()?;
        tracing::info!("Extracted {} lines", block.lines().count());

        tracing::info!("Transforming data...");
        let result = self.pipeline.transform(block)?;
        let rows = result.records.len();
        tracing::info!("Transformed {} records", rows);

        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(RunSummary { output_path, rows })
    }
}
