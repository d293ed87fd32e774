pub mod etl;
pub mod extract;
pub mod header;
pub mod pipeline;

pub use crate::domain::model::{
    CourseRecord, Department, DepartmentReport, DepartmentStatus, InsertOutcome,
};
pub use crate::domain::ports::{ConfigProvider, CourseSink, PageFetcher, Pipeline};
pub use crate::utils::error::Result;
