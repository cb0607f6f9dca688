//! Password scoring sections
//!
//! Each section scores one aspect of the password and may contribute
//! remarks. The analyzer runs them in a fixed order; remark order is
//! part of the reporting contract.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::variety_section;

/// Points and remarks contributed by one scoring section.
#[derive(Debug, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: i64,
    pub remarks: Vec<&'static str>,
}
