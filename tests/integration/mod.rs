//! Integration tests with mock HTTP server

pub mod available_numbers;
pub mod mock_server;
pub mod resources;
