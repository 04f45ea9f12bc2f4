pub mod api;
pub mod args;
pub mod client;
pub mod domain;
pub mod output;
pub mod report;
pub mod utils;

pub use args::Args;
pub use client::{collect_urls, MediathekClient, QueryError, QueryOutcome};
pub use domain::{extract_hostname, main_domain};
pub use report::{discover_domains, DomainReport};
