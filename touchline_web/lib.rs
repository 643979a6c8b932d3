pub mod components;
pub mod content;
pub mod handlers;
pub mod pages;
mod http;

pub use http::*;
