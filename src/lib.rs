pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod storage;

pub use crate::core::{
    Action, DefaultPipelineConfig, FailurePolicy, LogItem, OpenMode, PipelineConfig,
    ProgressReporter, ReportError, RunSummary, User,
};
pub use engine::{create_local_pipeline, create_quiet_local_pipeline, ReportPipeline};
pub use storage::{local::LocalReportStorage, ReportStorage};
