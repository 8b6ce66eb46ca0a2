//! XOVER command and overview data parsing

use std::collections::HashMap;

use crate::response::NntpResponse;

/// Build XOVER command for fetching article overview data
pub fn xover(range: &str) -> String {
    format!("XOVER {}\r\n", range)
}

/// Build LIST OVERVIEW.FMT command (RFC 3977 §8.4)
///
/// Lists the format of overview data.
pub fn list_overview_fmt() -> &'static str {
    "LIST OVERVIEW.FMT\r\n"
}

/// Parse LIST OVERVIEW.FMT response into ordered field names
///
/// One field name per line, in the order the XOVER columns appear. A
/// trailing ":" type marker is stripped ("Subject:" becomes "Subject");
/// other suffix forms ("Xref:full", ":bytes") are kept verbatim.
pub fn parse_overview_fmt_response(response: NntpResponse) -> Vec<String> {
    response
        .lines
        .iter()
        .map(|line| line.strip_suffix(':').unwrap_or(line).to_string())
        .collect()
}

/// One article's overview data, keyed by the server's overview field names
///
/// Built from a single XOVER line zipped positionally against the field
/// list discovered via LIST OVERVIEW.FMT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverviewEntry {
    /// Field name to raw value, one entry per overview column present
    pub headers: HashMap<String, String>,
}

/// Decode one XOVER line against the discovered field list
///
/// The line is tab-separated; index 0 is the article number and carries no
/// field name, so values are zipped with `fields` starting at index 1. A
/// line with fewer values than field names yields a partial record (the
/// unmatched names are simply absent); values beyond the field list are
/// ignored.
pub fn parse_overview_line(line: &str, fields: &[String]) -> OverviewEntry {
    let headers = fields
        .iter()
        .zip(line.split('\t').skip(1))
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect();

    OverviewEntry { headers }
}
