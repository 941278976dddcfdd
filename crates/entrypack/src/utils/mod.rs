pub mod commons_chunks;
pub mod other_named_chunk_groups;
