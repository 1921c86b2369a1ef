mod container_engine;
mod coordinator;
mod job_catalog;

pub use container_engine::ContainerEngine;
pub use coordinator::Coordinator;
pub use job_catalog::{JobCatalog, JobDirectory};
