//! Output generation for the headline report.
//!
//! # Submodules
//!
//! - [`text`]: Renders the aggregate headline list as a numbered plain-text
//!   report and writes it to disk, falling back to the user's Desktop when
//!   the primary destination is not writable.

pub mod text;
