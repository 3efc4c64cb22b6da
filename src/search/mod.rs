pub mod client;
pub mod types;

pub use client::SearchClient;
pub use types::QueryHit;
