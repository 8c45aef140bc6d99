use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct FilterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> FilterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }

    /// Runs extract, transform and load once; returns the number of values written.
    pub fn run(&mut self) -> Result<usize> {
        tracing::info!("Starting filter run");

        let raw_data = self.pipeline.extract()?;
        tracing::debug!("Extracted {} values", raw_data.len());

        let result = self.pipeline.transform(raw_data)?;
        tracing::debug!(
            "Selected {} values, dropped {}",
            result.selected.len(),
            result.dropped()
        );

        let written = self.pipeline.load(result)?;
        tracing::info!("Filter run finished, {} values written", written);

        Ok(written)
    }
}
