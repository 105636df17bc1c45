//! CLI commands for campus

pub mod benefits;
pub mod categories;
pub mod compass;
pub mod dispatch;
pub mod faq;
pub mod format;
pub mod guide;
pub mod list;
pub mod show;
pub mod validate;
pub mod worksheets;
