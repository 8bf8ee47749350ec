use super::{RequestSummary, Submittable};
use crate::access::AccessStatus;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AccessRequestBody<'a> {
    #[serde(rename = "folderId")]
    pub folder_id: &'a str,
    pub reason: &'a str,
}

impl Submittable for AccessRequestBody<'_> {
    const METHOD: Method = Method::POST;
    const FORMAT_STRING: &'static str = "access/request-access";
    type Reply = RequestAccessReply;
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateBody {
    pub status: AccessStatus,
}

impl Submittable for StatusUpdateBody {
    const METHOD: Method = Method::PUT;
    const FORMAT_STRING: &'static str = "access/update-request/{}";
    type Reply = MessageReply;
}

// The backend calls the folder id "fileId" on this endpoint
#[derive(Debug, Serialize)]
pub struct GrantAccessBody<'a> {
    #[serde(rename = "fileId")]
    pub folder_id: &'a str,
    #[serde(rename = "employeeId")]
    pub employee_id: &'a str,
    pub reason: &'a str,
}

impl Submittable for GrantAccessBody<'_> {
    const METHOD: Method = Method::POST;
    const FORMAT_STRING: &'static str = "access/GiveAccess";
    type Reply = MessageReply;
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestAccessReply {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub request: Option<RequestSummary>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageReply {
    #[serde(default)]
    pub msg: Option<String>,
}
