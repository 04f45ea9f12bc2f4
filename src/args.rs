use clap::Parser;

use crate::client::DEFAULT_ENDPOINT;

pub const DEFAULT_SEARCH_TERMS: [&str; 22] = [
    "ARD",
    "ZDF",
    "WDR",
    "SWR",
    "BR",
    "NDR",
    "RBB",
    "MDR",
    "HR",
    "SR",
    "arte",
    "3sat",
    "KiKA",
    "Phoenix",
    "tagesschau",
    "heute",
    "ZDFinfo",
    "ZDFneo",
    "One",
    "ARDalpha",
    "ZDFkultur",
    "Märchen",
];

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "mediathek-cdns",
    about = "Discover the CDN domains serving MediathekViewWeb media URLs",
    version,
    long_about = None
)]
pub struct Args {
    /// Search terms matched against channel, title and topic
    #[arg(default_values = DEFAULT_SEARCH_TERMS)]
    pub terms: Vec<String>,

    /// Number of results to request per search term
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub size: usize,

    /// Search API endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
