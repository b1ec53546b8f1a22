pub mod company;
mod html;
mod parse;
pub mod person;
pub mod types;
pub mod websearch;

pub use company::CompanyEnricher;
pub use person::PersonEnricher;
pub use types::{CompanyNews, EnrichConfig, PersonMetrics};
pub use websearch::WebSearchClient;
