use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

// Responses of GET endpoints. The format string is relative to the API base URL.
pub trait Queriable: DeserializeOwned {
    const FORMAT_STRING: &'static str;
}

// Request bodies of endpoints that change something on the backend
pub trait Submittable: Serialize {
    const METHOD: Method;
    const FORMAT_STRING: &'static str;
    type Reply: DeserializeOwned;
}
