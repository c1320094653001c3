//! Ruby version grammar shared by the parsers.

use regex::Regex;
use std::sync::LazyLock;

/// A Ruby version: `N`, `N.N` or `N.N.N`, optionally followed by a
/// pre-release tag such as `.preview1` or `-rc1`.
pub(crate) const VERSION_PATTERN: &str = r"\d+(?:\.\d+){0,2}(?:[.-][A-Za-z][0-9A-Za-z]*)?";

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

pub(crate) use lazy_regex;

lazy_regex!(RE_EXACT_VERSION, &format!("^{}$", VERSION_PATTERN));

/// Check whether `candidate` is a well-formed Ruby version.
pub fn is_valid_version(candidate: &str) -> bool {
    RE_EXACT_VERSION.is_match(candidate)
}
