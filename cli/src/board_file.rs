use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mineterm_core::{ConfigError, MineLayout, check_extension, parse_layout};
use thiserror::Error;

use crate::{EXIT_INVALID_CONFIG, EXIT_MISSING_CONFIG};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no board configuration given")]
    NoConfigPath,
    #[error("board configuration {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read board configuration {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("board configuration {} is not a regular file", .0.display())]
    NotAFile(PathBuf),
    #[error("board configuration {} is not valid UTF-8", .0.display())]
    NotUtf8(PathBuf),
    #[error("invalid board configuration {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

impl LoadError {
    /// Missing or unreachable files exit with 1, anything that exists but is not a valid board
    /// with 2.
    pub fn exit_code(&self) -> u8 {
        use LoadError::*;
        match self {
            NoConfigPath | NotFound(_) | Unreadable { .. } => EXIT_MISSING_CONFIG,
            NotAFile(_) | NotUtf8(_) | Invalid { .. } => EXIT_INVALID_CONFIG,
        }
    }
}

pub fn load(path: Option<&Path>) -> Result<MineLayout, LoadError> {
    let path = path.ok_or(LoadError::NoConfigPath)?;

    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_owned()),
        _ => LoadError::Unreadable {
            path: path.to_owned(),
            source,
        },
    })?;
    if !metadata.is_file() {
        return Err(LoadError::NotAFile(path.to_owned()));
    }

    let invalid = |source| LoadError::Invalid {
        path: path.to_owned(),
        source,
    };
    check_extension(path.extension().and_then(|ext| ext.to_str())).map_err(invalid)?;

    let bytes = fs::read(path).map_err(|source| LoadError::Unreadable {
        path: path.to_owned(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.to_owned()))?;

    parse_layout(&text).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_valid_board() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "simple.cfg", "..*\n...\n...\n");

        let layout = load(Some(&path)).unwrap();
        assert_eq!(layout.size(), (3, 3));
    }

    #[test]
    fn missing_path_exits_with_one() {
        let err = load(None).unwrap_err();
        assert!(matches!(err, LoadError::NoConfigPath));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn nonexistent_file_exits_with_one() {
        let dir = tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.cfg"))).unwrap_err();

        assert!(matches!(err, LoadError::NotFound(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn directory_exits_with_two() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("simple.cfg");
        fs::create_dir(&folder).unwrap();

        let err = load(Some(&folder)).unwrap_err();
        assert!(matches!(err, LoadError::NotAFile(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn wrong_extensions_exit_with_two() {
        let dir = tempdir().unwrap();
        for name in [".CfG", "test.ccfg", "test.foo", "simple", "test.CFG"] {
            let path = write(dir.path(), name, "..*\n");
            let err = load(Some(&path)).unwrap_err();

            assert!(
                matches!(
                    err,
                    LoadError::Invalid {
                        source: ConfigError::WrongExtension { .. },
                        ..
                    }
                ),
                "{name}"
            );
            assert_eq!(err.exit_code(), 2, "{name}");
        }
    }

    #[test]
    fn invalid_content_exits_with_two() {
        let dir = tempdir().unwrap();
        for content in ["", "\n", "a\n", "...\n*\n", ".\n", "***\n", "..*\n...\n..."] {
            let path = write(dir.path(), "simple.cfg", content);
            let err = load(Some(&path)).unwrap_err();

            assert_eq!(err.exit_code(), 2, "{content:?}");
        }
    }

    #[test]
    fn non_utf8_content_exits_with_two() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("simple.cfg");
        fs::write(&path, [b'.', 0xff, b'\n']).unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, LoadError::NotUtf8(_)));
        assert_eq!(err.exit_code(), 2);
    }
}
