/// Candidate module name for `filename`, or `""` when no suffix is recognized.
///
/// Suffixes are tried in the order given. The first one that occurs anywhere
/// in the filename wins, and the name is cut at its *last* occurrence. This
/// is a substring search, not an ends-with check: `"a.py.bak"` still yields
/// `"a"` for `".py"`.
pub fn module_stem<'a, S: AsRef<str>>(filename: &'a str, suffixes: &[S]) -> &'a str {
    for suffix in suffixes {
        if let Some(pos) = filename.rfind(suffix.as_ref()) {
            return &filename[..pos];
        }
    }
    ""
}
