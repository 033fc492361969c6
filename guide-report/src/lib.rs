//! Report assembly for the mentorship guides.
//!
//! A [`Report`] is an ordered list of titled sections made of typed blocks
//! (tables, paragraphs, bullet lists and stats). Reports serialize to JSON
//! and carry no layout, so any renderer can draw them.

pub mod assembler;
pub mod blocks;
pub mod business_case;
pub mod content;
pub mod format;
pub mod mentorship_template;

pub use assembler::assemble_report;
pub use blocks::{Block, Report, Section};
pub use business_case::BusinessCaseReport;
pub use mentorship_template::TemplateReport;
