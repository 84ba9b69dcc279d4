//! Text notation for boards.
//!
//! Implements parsing and serialization of the layout notation used on the
//! command line and in reports.

pub mod layout;

pub use layout::{encode_layout, parse_layout, LayoutError};
