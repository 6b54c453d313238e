pub mod download;
pub mod http;
pub mod runner;

pub use http::ReqwestTransport;
