use crate::domain::model::{FilterResult, Value};
use crate::utils::error::Result;

/// Destination for the load stage, one line at a time.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait InputProvider {
    fn input(&self) -> &[Value];
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Value>>;
    fn transform(&self, data: Vec<Value>) -> Result<FilterResult>;
    /// Returns the number of values written.
    fn load(&mut self, result: FilterResult) -> Result<usize>;
}
