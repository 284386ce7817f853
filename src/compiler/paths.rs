//! Lexical path handling
//!
//! Nothing here touches the file system: `a/./b/../c` becomes `a/c` whether or not `b`
//! exists or is a link.

use std::path::{Component, Path, PathBuf};

/// Folds `.` and `..` components.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    // `..` above the root stays at the root
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => normalized.push(".."),
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolves an input file against the base path.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    normalize_path(&base.join(path))
}

/// Resolves an import value against the directory of the importing file. Both `/` and `\`
/// separate components.
pub fn resolve_import(importer: &Path, value: &str) -> PathBuf {
    let value = value.replace('\\', "/");
    let dir = importer.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&dir.join(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/a/./b/../c", "/a/c")]
    #[case("a/b/../../c", "c")]
    #[case("../a", "../a")]
    #[case("/../a", "/a")]
    #[case("a/../../b", "../b")]
    fn test_normalize(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(normalize_path(Path::new(path)), PathBuf::from(expected));
    }

    #[test]
    fn test_resolve_import() {
        let importer = Path::new("/specs/sales/sell.feature");
        assert_eq!(
            resolve_import(importer, "../shared/login.feature"),
            PathBuf::from("/specs/shared/login.feature")
        );
        assert_eq!(
            resolve_import(importer, r"..\shared\login.feature"),
            PathBuf::from("/specs/shared/login.feature")
        );
        assert_eq!(
            resolve_import(importer, "/abs/x.feature"),
            PathBuf::from("/abs/x.feature")
        );
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path(Path::new("/specs"), Path::new("./a.feature")),
            PathBuf::from("/specs/a.feature")
        );
    }
}
