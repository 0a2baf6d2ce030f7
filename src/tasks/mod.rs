pub mod model;
pub mod storage;

pub use model::{validate_description, TaskRow, ValidationError, MAX_DESCRIPTION_CHARS};
pub use storage::{TaskStore, TaskStoreError};
