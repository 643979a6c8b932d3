pub mod app;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod queries_handlers;
pub mod repository;
pub mod uow;
pub mod views;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
