//! API route handlers
//!
//! Each submodule owns one endpoint group.

pub mod charts;
pub mod counties;
pub mod health;
pub mod page;
