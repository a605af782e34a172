pub mod etl;
pub mod locate;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{PathwayRecord, RecordId, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
