//! Tab management module
//!
//! - `page`: TabPage wrapper around the content of one tab
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab keys and their titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
