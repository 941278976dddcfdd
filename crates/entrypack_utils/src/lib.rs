pub mod asset_category;
pub mod indexmap;
pub mod public_path;
