pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{
    etl::FilterEngine, filter::filter_negative, pipeline::NegativeFilterPipeline,
};
pub use config::{
    cli::{StdoutSink, WriterSink},
    CliConfig, DEFAULT_INPUT,
};
pub use utils::error::{FilterError, Result};
