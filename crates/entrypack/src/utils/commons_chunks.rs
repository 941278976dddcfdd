use entrypack_common::{ExtractionRule, ExtractionRuleBuilder, MANIFEST_CHUNK_NAME, SharedEntry};

/// Plans the commons-chunk extraction for the given shared entries.
///
/// Every shared entry becomes one rule, in declaration order, which its options callback may
/// customize. A final `manifest` rule then moves the bundler runtime out of the last shared
/// chunk. The runtime changes on every build and would otherwise invalidate the long-term cache
/// of the vendor chunk. Without shared entries there is nothing to split and no rule is emitted.
pub fn commons_chunks(shared_entries: &[SharedEntry]) -> Vec<ExtractionRule> {
  if shared_entries.is_empty() {
    return Vec::new();
  }

  let mut rules = Vec::with_capacity(shared_entries.len() + 1);

  for entry in shared_entries {
    let mut builder = ExtractionRuleBuilder::new(entry.name.as_str());
    builder.chunks([entry.name.as_str()]);

    if let Some(callback) = &entry.options_callback {
      callback(&mut builder);
    }

    tracing::debug!(
      chunk = builder.name(),
      min_chunks = %builder.threshold(),
      "planned shared entry extraction"
    );
    rules.push(builder.build());
  }

  rules.push(ExtractionRuleBuilder::new(MANIFEST_CHUNK_NAME).build());

  rules
}
