use entrypack_common::{BuildStatistics, Entrypoints, TEMPORARY_CHUNK_GROUPS};
use entrypack_utils::{
  asset_category::classify, indexmap::group_in_order, public_path::with_public_path,
};
use rustc_hash::FxHashSet;

/// Collects the named chunk groups the bundler did not list as entrypoints, such as shared
/// vendor chunks, with their public asset URLs grouped by category.
///
/// Groups already in `known_entrypoints` and the scratch groups in [`TEMPORARY_CHUNK_GROUPS`]
/// are skipped. Within a category assets keep the order the bundler reported them in.
pub fn get_other_named_chunk_groups(
  stats: &BuildStatistics,
  known_entrypoints: &FxHashSet<&str>,
) -> Entrypoints {
  stats
    .named_chunk_groups
    .iter()
    .filter(|(name, _)| {
      !known_entrypoints.contains(name.as_str()) && !TEMPORARY_CHUNK_GROUPS.contains(&name.as_str())
    })
    .map(|(name, group)| {
      let assets = group.assets.iter().map(|asset| with_public_path(&stats.public_path, asset));
      (name.clone(), group_in_order(assets, |asset| classify(asset)))
    })
    .collect()
}
