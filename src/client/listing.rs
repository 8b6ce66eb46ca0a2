//! Newsgroup listing and overview format discovery

use super::NntpClient;
use crate::commands;
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// List the server's newsgroups
    ///
    /// Returns the raw LIST body in server order; the lines are not parsed
    /// further.
    pub async fn list(&mut self) -> Result<Vec<String>> {
        debug!("Listing newsgroups");

        let response = self
            .exchange_multiline(commands::list(), codes::LIST_INFORMATION_FOLLOWS)
            .await?;

        let lines = commands::parse_list_response(response);
        debug!("Retrieved {} newsgroup lines", lines.len());
        Ok(lines)
    }

    /// List the overview format fields
    ///
    /// Returns the field names in the order they appear in XOVER output,
    /// with a trailing ":" marker stripped.
    /// [`select_group`](Self::select_group) runs this as part of selection;
    /// it is exposed separately for callers that want the layout on its own.
    ///
    /// RFC 3977 Section 8.4
    pub async fn list_overview_fmt(&mut self) -> Result<Vec<String>> {
        debug!("Requesting overview format");

        let response = self
            .exchange_multiline(
                commands::list_overview_fmt(),
                codes::LIST_INFORMATION_FOLLOWS,
            )
            .await?;

        let fields = commands::parse_overview_fmt_response(response);
        debug!("Retrieved {} overview format fields", fields.len());
        Ok(fields)
    }
}
