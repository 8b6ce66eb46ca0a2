//! Session state for the NNTP client

/// Session progress through the reader workflow
///
/// Group selection is re-enterable: another GROUP cycle replaces the
/// previous selection. There is no terminal state; `quit` consumes the
/// client instead.
#[derive(Debug)]
pub(super) enum SessionState {
    /// Greeting received, no mode selected
    Greeted,
    /// MODE READER accepted
    ReaderMode,
    /// A newsgroup is selected
    GroupSelected,
}
