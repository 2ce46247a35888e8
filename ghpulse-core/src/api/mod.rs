//! Backend API access
//!
//! The backend is a thin proxy/cache over the GitHub REST and GraphQL APIs.
//! ghpulse only issues `GET` requests and decodes JSON; authentication,
//! rate limiting and caching are the backend's concern.
//!
//! ## Usage
//!
//! Point the client at a backend in `~/.config/ghpulse/config.toml`:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//! timeout_secs = 30
//! ```

mod client;

pub use client::ApiClient;
