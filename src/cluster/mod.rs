//! Name-token clustering.
//!
//! Pipeline (leaves first): tokenizer -> frequency -> ranker -> resolver.
//! Everything here is pure and works on the scanned `FileEntry` snapshot;
//! the filesystem is only touched later by the mover.

pub mod frequency;
pub mod ranker;
pub mod resolver;
pub mod tokenizer;

pub use frequency::{count_tokens, TokenFrequency};
pub use ranker::{rank_tokens, RankedToken};
pub use resolver::{resolve_auto_groups, resolve_explicit_group, sanitize_label, Group};
pub use tokenizer::tokenize;

/// Shortest run (in characters) that can become a token.
pub const MIN_TOKEN_LEN: usize = 4;
/// A token or group needs at least this many distinct files.
pub const MIN_GROUP_SIZE: usize = 2;
/// Upper bound on auto-detected groups per run.
pub const MAX_GROUPS: usize = 10;
