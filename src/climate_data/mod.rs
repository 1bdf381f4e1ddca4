pub mod api_config;
pub mod data_loader;
pub mod error;
pub mod fetcher;
mod response_parser;
