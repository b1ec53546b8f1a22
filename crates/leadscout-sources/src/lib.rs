pub mod error;
pub mod github;
pub mod jobicy;
mod retry;
pub mod types;

pub use error::SourceError;
pub use github::GithubSearchClient;
pub use jobicy::JobicyClient;
pub use types::{JobListing, UserHit};
