use crate::core::filter::filter_negative;
use crate::core::{FilterResult, InputProvider, LineSink, Pipeline, Value};
use crate::utils::error::Result;

pub struct NegativeFilterPipeline<S: LineSink, C: InputProvider> {
    sink: S,
    config: C,
}

impl<S: LineSink, C: InputProvider> NegativeFilterPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LineSink, C: InputProvider> Pipeline for NegativeFilterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Value>> {
        let input = self.config.input().to_vec();
        tracing::debug!("Input sequence: {:?}", input);
        Ok(input)
    }

    fn transform(&self, data: Vec<Value>) -> Result<FilterResult> {
        let selected = filter_negative(&data);
        Ok(FilterResult {
            selected,
            inspected: data.len(),
        })
    }

    fn load(&mut self, result: FilterResult) -> Result<usize> {
        for value in &result.selected {
            self.sink.write_line(&value.to_string())?;
        }
        self.sink.finish()?;

        tracing::debug!("Wrote {} lines to sink", result.selected.len());
        Ok(result.selected.len())
    }
}
