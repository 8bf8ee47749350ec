mod request_error;
pub use self::request_error::RequestError;
