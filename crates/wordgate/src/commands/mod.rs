//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod info;

/// Outcome of a command that can fail the gate without erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing objectionable was found.
    Pass,
    /// A banned word was found and reported.
    Banned,
}

/// Read a file and validate its size against the configured limit.
///
/// The size is checked via metadata before the file is read into memory.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len();
        if size > max as u64 {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_file_within_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "main.cpp", "int main() {}");
        assert_eq!(read_input_file(&path, Some(1024)).unwrap(), "int main() {}");
    }

    #[test]
    fn rejects_file_over_limit() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "main.cpp", "int main() {}");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().starts_with("input too large"));
    }

    #[test]
    fn no_limit_reads_anything() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "main.cpp", "int main() {}");
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_input_file(Utf8Path::new("does/not/exist.cpp"), None).unwrap_err();
        assert_eq!(err.to_string(), "failed to read does/not/exist.cpp");
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("blob.bin")).unwrap();
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        assert!(read_input_file(&path, None).is_err());
    }
}
