use std::iter;

use crate::catalog::IgnoreSet;

use super::MIN_TOKEN_LEN;

/// Candidate tokens of a filename stem.
///
/// Yields every lowercase alphanumeric run of at least four characters (the
/// stem is split on each non-alphanumeric character), followed by the whole
/// lowercased stem when it is long enough. Tokens in `ignore` never leave
/// this function. A token may appear twice (e.g. a single-word stem); callers
/// that count must de-duplicate per file.
pub fn tokenize<'a>(stem: &'a str, ignore: &'a IgnoreSet) -> impl Iterator<Item = String> + 'a {
    let runs = stem
        .split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_lowercase);

    runs.chain(iter::once_with(|| stem.to_lowercase()))
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(move |token| !ignore.contains(token))
}
