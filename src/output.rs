use std::io::{self, Write};

use crate::report::DomainReport;

/// Renders domains as a bracketed, comma-separated list of quoted strings,
/// one per line, ready to paste into source code.
pub fn render_array_literal(domains: &[String]) -> String {
    let body = domains
        .iter()
        .map(|domain| format!("\"{}\"", domain))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("[\n{}\n]", body)
}

/// Renders search terms the way a Python list prints: `['ARD', 'ZDF']`.
/// Terms containing a single quote but no double quote are double-quoted.
pub fn render_term_list<S: AsRef<str>>(terms: &[S]) -> String {
    let items = terms
        .iter()
        .map(|term| {
            let term = term.as_ref().replace('\\', "\\\\");
            if term.contains('\'') && !term.contains('"') {
                format!("\"{}\"", term)
            } else {
                format!("'{}'", term.replace('\'', "\\'"))
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", items)
}

pub fn print_banner<W: Write, S: AsRef<str>>(
    out: &mut W,
    terms: &[S],
    page_size: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "Fetching URLs for search terms: {} with {} results per page...",
        render_term_list(terms),
        page_size
    )
}

pub fn print_report<W: Write>(out: &mut W, report: &DomainReport) -> io::Result<()> {
    writeln!(out, "\n--- Unique Full Domains (including subdomains) ---")?;
    for domain in &report.full_domains {
        writeln!(out, "{}", domain)?;
    }

    writeln!(out, "\n--- Unique Main Domains (e.g., ardemediathek.de) ---")?;
    for domain in &report.main_domains {
        writeln!(out, "{}", domain)?;
    }

    writeln!(out, "\n--- Unique Main Domains (e.g., ardemediathek.de) as Array---")?;
    writeln!(out, "{}", render_array_literal(&report.main_domains))?;

    Ok(())
}
