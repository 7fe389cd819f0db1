//! Text helpers shared by every locale

/// Code points scanned before a space ends a comment excerpt
const SOFT_LIMIT: usize = 100;

/// Code points kept when no earlier stopping point is found
const HARD_LIMIT: usize = 120;

/// Prefix of refs that name a branch
const BRANCH_PREFIX: &str = "refs/heads/";

/// Result of shortening a comment body for a single chat line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Excerpt<'a> {
    /// Short enough to be sent as is
    Whole(&'a str),
    /// Cut at a line break, or at a space past the soft limit
    Soft { kept: &'a str, omitted: usize },
    /// Cut after the hard limit with no better stopping point
    Hard { kept: &'a str, omitted: usize },
}

/// Shorten a comment body
///
/// Scans by code point. A CR or LF, or a space once more than 100 code points
/// have been scanned, ends the excerpt just before it. Otherwise the 121st code
/// point ends it. `omitted` is the byte length of the dropped tail.
pub fn excerpt(body: &str) -> Excerpt<'_> {
    for (n, (i, c)) in body.char_indices().enumerate() {
        let scanned = n + 1;
        if c == '\r' || c == '\n' || (c == ' ' && scanned > SOFT_LIMIT) {
            return Excerpt::Soft {
                kept: &body[..i],
                omitted: body.len() - i,
            };
        }
        if scanned > HARD_LIMIT {
            return Excerpt::Hard {
                kept: &body[..i],
                omitted: body.len() - i,
            };
        }
    }
    Excerpt::Whole(body)
}

/// Branch name of a `refs/heads/...` ref
pub fn branch_name(git_ref: &str) -> Option<&str> {
    git_ref.strip_prefix(BRANCH_PREFIX)
}

/// ` (<url>)`, or nothing when there is no URL
pub fn url_suffix(url: Option<&str>) -> String {
    url.map(|url| format!(" ({url})")).unwrap_or_default()
}
