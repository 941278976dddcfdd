/// Scratch chunk group created for shared entries before they are split out.
pub const SHARED_ENTRY_TMP_NAME: &str = "_tmp_shared";

/// Scratch chunk group created to route copied static files through the bundler.
pub const COPY_ENTRY_TMP_NAME: &str = "_tmp_copy";

pub const TEMPORARY_CHUNK_GROUPS: [&str; 2] = [SHARED_ENTRY_TMP_NAME, COPY_ENTRY_TMP_NAME];

/// Name of the trailing extraction rule holding the bundler runtime bookkeeping.
pub const MANIFEST_CHUNK_NAME: &str = "manifest";

pub const ENTRYPOINTS_FILE_NAME: &str = "entrypoints.json";
