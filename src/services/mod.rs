pub mod api_client;
pub mod visitor_service;

pub use api_client::*;
pub use visitor_service::*;
