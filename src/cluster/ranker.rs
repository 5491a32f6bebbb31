use std::cmp::Ordering;

use super::frequency::TokenFrequency;
use super::{MAX_GROUPS, MIN_GROUP_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedToken {
    pub token: String,
    pub count: usize,
}

/// Tokens worth a folder: count >= 2, most frequent first, ties by token
/// ascending, at most ten. An empty result means nothing to cluster.
pub fn rank_tokens(freq: &TokenFrequency) -> Vec<RankedToken> {
    let mut ranked: Vec<RankedToken> = freq
        .iter()
        .filter(|(_, count)| **count >= MIN_GROUP_SIZE)
        .map(|(token, count)| RankedToken {
            token: token.clone(),
            count: *count,
        })
        .collect();

    ranked.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.token.cmp(&b.token),
        other => other,
    });
    ranked.truncate(MAX_GROUPS);
    ranked
}
