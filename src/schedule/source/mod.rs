pub mod fetch;
pub mod http_client;

pub use fetch::DocumentSource;
pub use http_client::create_http_client;
