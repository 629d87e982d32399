//!
//! Command line compatibility helpers.
//!

use std::ffi::OsString;

///
/// Rewrites single-dash long flags such as `-file` or `-o1` to their double-dash form.
///
/// Only the names listed in `long_flags` are rewritten, so short flags like `-q` and
/// negative numbers pass through untouched. An inline value (`-o1=out.tex`) is kept.
///
/// # Example
///
/// ```rust
/// use std::ffi::OsString;
///
/// use benchmark_reporter::util::args::normalize_long_flags;
///
/// let arguments = ["wrk-report", "-folders", "a", "-o1=t.tex", "-q", "--o2", "b.tex"]
///     .map(OsString::from);
/// let normalized = normalize_long_flags(arguments, &["folders", "o1", "o2"]);
/// assert_eq!(
///     normalized,
///     ["wrk-report", "--folders", "a", "--o1=t.tex", "-q", "--o2", "b.tex"].map(OsString::from)
/// );
/// ```
pub fn normalize_long_flags<I>(arguments: I, long_flags: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    arguments
        .into_iter()
        .map(|argument| {
            let Some(text) = argument.to_str() else {
                return argument;
            };
            let Some(flag) = text.strip_prefix('-') else {
                return argument;
            };
            if flag.starts_with('-') {
                return argument;
            }
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            if long_flags.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                argument
            }
        })
        .collect()
}
