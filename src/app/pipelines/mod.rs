pub mod group_pipeline;
pub mod summary_pipeline;

pub use group_pipeline::GroupPipeline;
pub use summary_pipeline::SummaryPipeline;
