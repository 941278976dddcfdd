use entrypack_utils::indexmap::FxIndexMap;

/// Public asset URLs of one group, keyed by asset category (`js`, `css`, ...).
pub type GroupedAssets = FxIndexMap<String, Vec<String>>;

/// The `entrypoints` field of `entrypoints.json`, keyed by entry or chunk group name.
pub type Entrypoints = FxIndexMap<String, GroupedAssets>;
