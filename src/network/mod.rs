//! HTTP plumbing for the movie database collaborator

mod client;

pub use client::{ApiResponse, HttpClient};
