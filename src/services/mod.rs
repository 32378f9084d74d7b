pub mod api_client;
pub mod http;
pub mod storage;

#[cfg(test)]
pub mod testing;

pub use api_client::ApiClient;
pub use http::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use storage::{LocalTokenStore, MemoryTokenStore, TokenStore};
