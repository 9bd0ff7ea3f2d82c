//! Command implementations for graphcheck

pub mod dispatch;
pub mod report;
