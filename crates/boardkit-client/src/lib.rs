//! # boardkit-client
//!
//! Async HTTP client for the board API: listing and fetching boards,
//! dispatching reconciled drafts as create or update requests, and
//! downloading attachments with display-name recovery.
//!
//! Every method suspends only at the network boundary; no retries,
//! queueing, or cancellation are performed. See `boardkit-core` for
//! the draft and manifest logic that feeds [`BoardClient::submit`].

pub mod client;

pub use client::{BoardClient, DownloadedFile};
