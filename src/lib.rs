#![doc = include_str!("../README.md")]

mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
mod error;
mod response;

pub use client::{NntpClient, XoverProgress};
pub use commands::{Group, GroupInfo, OverviewEntry};
pub use config::ServerConfig;
pub use error::{NntpError, Result};
pub use response::{NntpResponse, codes};
