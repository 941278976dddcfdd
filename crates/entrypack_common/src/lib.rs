mod constants;
mod types;

pub use crate::{
  constants::{
    COPY_ENTRY_TMP_NAME, ENTRYPOINTS_FILE_NAME, MANIFEST_CHUNK_NAME, SHARED_ENTRY_TMP_NAME,
    TEMPORARY_CHUNK_GROUPS,
  },
  types::{
    build_statistics::{BuildStatistics, ChunkGroup},
    entrypoints::{Entrypoints, GroupedAssets},
    extraction_rule::{Async, ExtractionRule, ExtractionRuleBuilder, MinChunks},
    extraction_rule_options::ExtractionRuleOptions,
    one_or_many::OneOrMany,
    shared_entry::{OptionsCallback, SharedEntry},
  },
};
