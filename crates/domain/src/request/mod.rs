//! Request description types
//!
//! These types describe an outgoing API call independently of any HTTP
//! library; the transport adapter turns them into real wire requests.

mod body;
mod method;
mod options;
mod query;

pub use body::{FormData, FormField, RequestBody};
pub use method::HttpMethod;
pub use options::RequestOptions;
pub use query::QueryParams;
