pub mod container_engine_command;
pub mod coordinator_http;
pub mod jobs_filesystem;

pub use container_engine_command::ContainerEngineCommand;
pub use coordinator_http::HttpCoordinatorClient;
pub use jobs_filesystem::FilesystemJobCatalog;
