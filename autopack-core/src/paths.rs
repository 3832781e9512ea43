//! Lexical path helpers for import specifiers.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment where possible. The filesystem is never consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out.iter().collect()
}

/// Import path of `to` as seen from the file `from`.
///
/// The path is computed relative to `from` itself (so it starts with one
/// `..` too many), then that leading `../` is dropped exactly once. Segments
/// are always joined with `/` regardless of platform.
///
/// ```
/// use std::path::Path;
/// use autopack_core::relative_path;
///
/// let rel = relative_path(
///     Path::new("app/javascript/packs/generated/Hello.js"),
///     Path::new("app/javascript/bundles/Hello/ror_components/Hello.jsx"),
/// );
/// assert_eq!(rel, "../../bundles/Hello/ror_components/Hello.jsx");
/// ```
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from = normalize(from);
    let to = normalize(to);

    let from_parts: Vec<_> = from.components().collect();
    let to_parts: Vec<_> = to.components().collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n(
        "..".to_string(),
        from_parts.len() - common,
    ));
    segments.extend(
        to_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if segments.is_empty() {
        return ".".to_string();
    }

    let joined = segments.join("/");
    match joined.strip_prefix("../") {
        Some(rest) => rest.to_string(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
        assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
    }

    #[test]
    fn test_relative_path_sibling_directory() {
        let rel = relative_path(
            Path::new("/app/js/packs/server-bundle.js"),
            Path::new("/app/js/generated/server-bundle-generated.js"),
        );
        assert_eq!(rel, "../generated/server-bundle-generated.js");
    }

    #[test]
    fn test_relative_path_same_directory() {
        let rel = relative_path(Path::new("/app/gen/a.js"), Path::new("/app/gen/b.js"));
        assert_eq!(rel, "b.js");
    }

    #[test]
    fn test_relative_path_strips_only_one_parent() {
        let rel = relative_path(
            Path::new("/app/js/packs/generated/Foo.js"),
            Path::new("/app/js/components/Foo/ror_components/Foo.jsx"),
        );
        assert_eq!(rel, "../../components/Foo/ror_components/Foo.jsx");
    }

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let rel = relative_path(Path::new("a/b/c.js"), Path::new("a/d/e/f.js"));
        assert!(!rel.contains('\\'));
        assert_eq!(rel, "../d/e/f.js");
    }
}
