pub mod entry_files_manifest;
