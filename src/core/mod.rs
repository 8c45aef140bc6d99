pub mod etl;
pub mod filter;
pub mod pipeline;

pub use crate::domain::model::{FilterResult, Value};
pub use crate::domain::ports::{InputProvider, LineSink, Pipeline};
pub use crate::utils::error::Result;
