use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Inlines the referenced code file into the output stream.
///
/// Emits a `#### <name>` header line, then the file's content verbatim
/// (every byte as stored, line terminators untouched), then a closing
/// `#### --` delimiter line. The file at `code_dir/<name>` is opened, read
/// in full, and released before returning; nothing is cached.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. The header line
/// has already been written to `out` by that point, so a failed inline
/// leaves exactly the header behind.
pub fn inline_code_file<W: Write>(code_dir: &Path, name: &str, out: &mut W) -> Result<()> {
    writeln!(out, "#### {}", name)?;
    let path = code_dir.join(name);
    let content = fs::read(&path)
        .with_context(|| format!("Error opening file {}", path.display()))?;
    out.write_all(&content)?;
    writeln!(out, "#### --")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inlines_file_between_delimiters() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("hello.py"), "print(1)\nprint(2)\n").unwrap();

        let mut out = Vec::new();
        inline_code_file(dir.path(), "hello.py", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "#### hello.py\nprint(1)\nprint(2)\n#### --\n");
    }

    #[test]
    fn test_inlines_nested_relative_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("demo")).unwrap();
        fs::write(dir.path().join("demo/app.rb"), "puts 'hi'\n").unwrap();

        let mut out = Vec::new();
        inline_code_file(dir.path(), "demo/app.rb", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "#### demo/app.rb\nputs 'hi'\n#### --\n");
    }

    #[test]
    fn test_empty_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("empty.sh"), "").unwrap();

        let mut out = Vec::new();
        inline_code_file(dir.path(), "empty.sh", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "#### empty.sh\n#### --\n");
    }

    #[test]
    fn test_missing_file_leaves_only_header() {
        let dir = TempDir::new().expect("Failed to create temp dir");

        let mut out = Vec::new();
        let result = inline_code_file(dir.path(), "missing.py", &mut out);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Error opening file"));
        assert!(err_msg.contains("missing.py"));

        // The header was emitted before the open; nothing followed it.
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "#### missing.py\n");
    }
}
