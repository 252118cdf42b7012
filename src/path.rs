use std::path::{Component, Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

/// Compile a shell-style glob.
///
/// `*` crosses path separators (so `*.md` matches `docs/readme.md`), `?`
/// matches one character, `[...]` is a character class and `**` spans any
/// number of directories. A backslash is an ordinary character, as in
/// fnmatch. Matching is case-sensitive.
///
/// `{a,b}` alternation is a globset extension with no fnmatch equivalent.
pub(crate) fn compile_glob(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .literal_separator(false)
        .backslash_escape(false)
        .build()?
        .compile_matcher())
}

/// Express `raw` relative to `cwd` when it lies inside it.
///
/// `.` components and repeated separators are dropped first. Paths outside
/// `cwd`, and already relative paths, are returned otherwise unchanged.
pub(crate) fn relative_to(raw: &str, cwd: &Path) -> String {
    let cleaned: PathBuf = Path::new(raw)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    match cleaned.strip_prefix(cwd) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_string_lossy().into_owned(),
        _ => cleaned.to_string_lossy().into_owned(),
    }
}
