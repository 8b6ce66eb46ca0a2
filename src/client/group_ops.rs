use super::NntpClient;
use super::state::SessionState;
use crate::commands;
use crate::error::Result;
use crate::response::codes;
use tracing::debug;

impl NntpClient {
    /// Select a newsgroup and discover its overview field layout
    ///
    /// Runs the GROUP cycle, then unconditionally a LIST OVERVIEW.FMT
    /// cycle, and returns both combined as a [`Group`](commands::Group).
    /// There is no partially-selected state: if format discovery fails the
    /// whole selection fails, even though the server already accepted the
    /// GROUP command. Selecting again (the same group or another) replaces
    /// the previous descriptor and its field list entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedStatus`](crate::NntpError::UnexpectedStatus) -
    ///   either cycle's status was not the expected 211/215
    /// - [`NntpError::MalformedResponse`](crate::NntpError::MalformedResponse) -
    ///   the GROUP status line did not parse as `count first last name`
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<commands::Group> {
        debug!("Selecting newsgroup: {}", newsgroup);

        let cmd = commands::group(newsgroup);
        let response = self.exchange(&cmd, codes::GROUP_SELECTED).await?;
        let info = commands::parse_group_response(&response)?;

        let overview_fmt = self.list_overview_fmt().await?;

        self.current_group = Some(newsgroup.to_string());
        self.state = SessionState::GroupSelected;

        debug!(
            "Group {} selected: {} articles ({}-{})",
            newsgroup, info.count, info.first, info.last
        );

        Ok(commands::Group {
            name: newsgroup.to_string(),
            count: info.count,
            first: info.first,
            last: info.last,
            overview_fmt,
        })
    }
}
