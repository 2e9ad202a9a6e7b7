pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod loader;
pub mod ranker;
pub mod resolver;
pub mod vocabulary;

pub use crate::domain::model::{BarrierResult, ReportOutput, SurveyTable};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
