use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::client::{collect_urls, MediathekClient, QueryOutcome};
use crate::domain::{extract_hostname, main_domain, HostError};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct DomainReport {
    /// Unique hostnames, ascending.
    pub full_domains: Vec<String>,
    /// Unique last-two-label domains, ascending.
    pub main_domains: Vec<String>,
    pub queries_issued: usize,
    pub queries_failed: usize,
    pub urls_collected: usize,
    pub urls_skipped: usize,
}

impl DomainReport {
    pub fn from_urls<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut full_domains = BTreeSet::new();
        let mut main_domains = BTreeSet::new();
        let mut urls_collected = 0;
        let mut urls_skipped = 0;

        for url in urls {
            let url = url.as_ref();
            urls_collected += 1;

            match extract_hostname(url) {
                Ok(host) => {
                    main_domains.insert(main_domain(&host));
                    full_domains.insert(host);
                }
                Err(HostError::MissingHost) => {
                    debug!(action = "skip", component = "domain_extraction", url, "URL has no host");
                    urls_skipped += 1;
                }
                Err(e) => {
                    warn!(action = "skip", component = "domain_extraction", url, error = %e, "Error parsing URL");
                    urls_skipped += 1;
                }
            }
        }

        Self {
            full_domains: full_domains.into_iter().collect(),
            main_domains: main_domains.into_iter().collect(),
            queries_issued: 0,
            queries_failed: 0,
            urls_collected,
            urls_skipped,
        }
    }

    pub fn from_outcomes(outcomes: &[QueryOutcome]) -> Self {
        let urls = outcomes
            .iter()
            .filter_map(|outcome| outcome.urls.as_ref().ok())
            .flatten();

        Self {
            queries_issued: outcomes.len(),
            queries_failed: outcomes.iter().filter(|o| o.is_failure()).count(),
            ..Self::from_urls(urls)
        }
    }
}

/// Queries every term and reduces the returned media URLs to their domains.
///
/// Never fails: terms whose query errors and URLs without a usable host are
/// logged and left out, so the worst case is an empty report.
pub fn discover_domains<S: AsRef<str>>(
    client: &MediathekClient,
    terms: &[S],
    page_size: usize,
) -> DomainReport {
    let start_time = Instant::now();

    let outcomes = collect_urls(client, terms, page_size);
    let report = DomainReport::from_outcomes(&outcomes);

    info!(
        action = "complete",
        component = "domain_discovery",
        queries_issued = report.queries_issued,
        queries_failed = report.queries_failed,
        urls_collected = report.urls_collected,
        urls_skipped = report.urls_skipped,
        full_domains = report.full_domains.len(),
        main_domains = report.main_domains.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Domain discovery completed"
    );

    report
}
