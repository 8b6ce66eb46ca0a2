//! Group selection command and response parsing

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}\r\n", newsgroup)
}

/// Article count and range reported by the GROUP command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupInfo {
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
}

/// A selected newsgroup together with its overview field layout
///
/// Produced by [`NntpClient::select_group`](crate::NntpClient::select_group),
/// which discovers the overview format as part of selection — a `Group` is
/// never seen without `overview_fmt` populated.
///
/// `first > last` is legal: the server reports an empty group that way, and
/// the reported bounds are not validated against actual article existence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Newsgroup name as selected
    pub name: String,
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
    /// Ordered overview field names for this server
    pub overview_fmt: Vec<String>,
}

impl Group {
    /// True when the server reported no articles (`first > last`)
    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    /// The `first-last` range argument for XOVER
    pub fn range(&self) -> String {
        format!("{}-{}", self.first, self.last)
    }

    /// Inclusive size of the article-number range, 0 for an empty group
    pub fn expected_articles(&self) -> u64 {
        if self.first > self.last {
            0
        } else {
            self.last - self.first + 1
        }
    }
}

/// Parse GROUP response into article count and range
///
/// Response message format: "count first last group-name". All four fields
/// must be present and the three numeric ones must parse.
pub fn parse_group_response(response: &NntpResponse) -> Result<GroupInfo> {
    let parts: Vec<&str> = response.message.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(NntpError::MalformedResponse(response.message.clone()));
    }

    let count = parts[0]
        .parse()
        .map_err(|_| NntpError::MalformedResponse(response.message.clone()))?;
    let first = parts[1]
        .parse()
        .map_err(|_| NntpError::MalformedResponse(response.message.clone()))?;
    let last = parts[2]
        .parse()
        .map_err(|_| NntpError::MalformedResponse(response.message.clone()))?;

    Ok(GroupInfo { count, first, last })
}
