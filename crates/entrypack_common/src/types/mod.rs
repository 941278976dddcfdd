pub mod build_statistics;
pub mod entrypoints;
pub mod extraction_rule;
pub mod extraction_rule_options;
pub mod one_or_many;
pub mod shared_entry;
