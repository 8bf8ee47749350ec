mod backend;
mod client;
pub mod credentials;
pub mod error;
mod query;

pub use backend::Backend;
pub use client::Client;
pub use error::RequestError;
pub use query::*;
