pub mod plan_format;
