//! Bulk overview fetching over a group's article range

use super::NntpClient;
use crate::commands::{self, Group, OverviewEntry};
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

/// Running progress of an overview fetch
#[derive(Debug, Clone, Copy)]
pub struct XoverProgress {
    /// Overview lines decoded so far
    pub decoded: u64,
    /// Inclusive size of the requested article-number range
    pub expected: u64,
}

impl XoverProgress {
    /// Percentage of the expected range decoded (0-100)
    ///
    /// The range counts article numbers, not existing articles, so a group
    /// with gaps completes below 100.
    #[must_use]
    pub fn percent_complete(&self) -> f64 {
        if self.expected == 0 {
            return 0.0;
        }
        (self.decoded as f64 / self.expected as f64) * 100.0
    }
}

impl NntpClient {
    /// Fetch overview data for the group's full article range
    ///
    /// One XOVER cycle over `first-last`. Each body line is decoded against
    /// the group's discovered field list; an empty group yields zero
    /// entries as long as the server answers 224 with an immediate
    /// terminator.
    pub async fn xover(&mut self, group: &Group) -> Result<Vec<OverviewEntry>> {
        self.xover_with_progress(group, |_| {}).await
    }

    /// Fetch overview data, observing progress after each decoded entry
    ///
    /// The observer receives the running decoded count against the size of
    /// the requested range; reporting (or ignoring) it is entirely the
    /// caller's concern.
    pub async fn xover_with_progress<F>(
        &mut self,
        group: &Group,
        mut progress: F,
    ) -> Result<Vec<OverviewEntry>>
    where
        F: FnMut(XoverProgress),
    {
        debug!("Fetching overview for {} ({})", group.name, group.range());

        let cmd = commands::xover(&group.range());
        let response = self
            .exchange_multiline(&cmd, codes::OVERVIEW_INFO_FOLLOWS)
            .await?;

        let expected = group.expected_articles();
        let mut entries = Vec::with_capacity(response.lines.len());
        for line in &response.lines {
            entries.push(commands::parse_overview_line(line, &group.overview_fmt));
            progress(XoverProgress {
                decoded: entries.len() as u64,
                expected,
            });
        }

        debug!("Decoded {} overview entries", entries.len());
        Ok(entries)
    }
}
