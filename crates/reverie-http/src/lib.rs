mod client;
mod error;

pub use crate::client::ServiceClient;
pub use crate::error::Error;
pub use reqwest::{Method, RequestBuilder, StatusCode};
