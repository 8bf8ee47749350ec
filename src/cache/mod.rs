pub mod cache_error;
mod folder_requests;
mod kv_store;

pub use cache_error::CacheError;
pub use folder_requests::*;
pub use kv_store::*;
