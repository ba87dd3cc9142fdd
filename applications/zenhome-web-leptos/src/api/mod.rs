mod account;
mod client;
mod devices;

pub use client::{ApiClient, ApiError};
