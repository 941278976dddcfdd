use std::sync::Arc;

use entrypack::{
  commons_chunks, BuildStatistics, Compiler, EntryFilesManifestPlugin, FileSystem, MinChunks,
  OsFileSystem, SharedEntry, TracingLogger,
};

#[tokio::main]
async fn main() {
  let dir = tempfile::tempdir().unwrap();
  let manifest_path = dir.path().join("entrypoints.json");

  let rules = commons_chunks(&[
    SharedEntry::new("vendor", ["react", "react-dom"]),
    SharedEntry::new("admin", "admin.js").with_options(|options| {
      options.min_chunks(MinChunks::Count(2));
    }),
  ]);
  println!("{}", serde_json::to_string_pretty(&rules).unwrap());

  OsFileSystem
    .write(
      &manifest_path,
      r#"{ "entrypoints": { "app": { "js": ["/build/app.js"] } } }"#,
    )
    .await
    .unwrap();

  let stats = BuildStatistics::new(dir.path(), "/build")
    .with_chunk_group("app", ["app.js"])
    .with_chunk_group("vendor", ["vendor.js", "vendor.css"])
    .with_chunk_group("manifest", ["manifest.js"]);

  let mut compiler = Compiler::new();
  compiler.apply(EntryFilesManifestPlugin::new(Arc::new(OsFileSystem), Arc::new(TracingLogger)));
  compiler.after_emit(&stats).await;

  println!("{}", OsFileSystem.read_to_string(&manifest_path).await.unwrap());
}
