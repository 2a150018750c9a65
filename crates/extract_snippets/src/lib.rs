// crates/extract_snippets/src/lib.rs

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use classify_markup_line::{classify_line, LineKind};
use inline_code_file::inline_code_file;

/// One forward pass over a markup stream, extracting highlighted regions and
/// inlining referenced code files.
///
/// The extractor carries a single piece of state: whether the scan is
/// currently inside a highlighted region. The flag survives across calls to
/// [`Extractor::process`], so several inputs fed to one extractor behave
/// like a single concatenated stream.
pub struct Extractor {
    inside_region: bool,
    code_dir: PathBuf,
}

impl Extractor {
    /// Creates an extractor that resolves file-reference directives against
    /// `code_dir`.
    pub fn new<P: AsRef<Path>>(code_dir: P) -> Self {
        Extractor {
            inside_region: false,
            code_dir: code_dir.as_ref().to_path_buf(),
        }
    }

    /// Scans `input` line by line and writes the extracted blocks to `out`.
    ///
    /// Lines are read with their terminators and emitted byte-for-byte, so
    /// output formatting matches the input exactly. A highlight-end marker
    /// emits the `#### --` delimiter; a file-reference directive emits the
    /// whole referenced file between `#### <path>` and `#### --` without
    /// touching the region state. Unbalanced markers are not errors: a stray
    /// end marker is a no-op transition, and a start marker with no end
    /// simply echoes the rest of the input.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced file cannot be read or if `out`
    /// rejects a write. The run stops at the failing directive; everything
    /// emitted before it stands.
    pub fn process<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Classification tolerates non-UTF-8 bytes; emission always uses
            // the original bytes.
            let line = String::from_utf8_lossy(&buf);
            match classify_line(&line) {
                LineKind::HighlightStart => {
                    self.inside_region = true;
                }
                LineKind::HighlightEnd => {
                    self.inside_region = false;
                    writeln!(out, "#### --")?;
                }
                LineKind::CodeInclude(name) => {
                    inline_code_file(&self.code_dir, &name, out)?;
                }
                LineKind::Plain => {
                    if self.inside_region {
                        out.write_all(&buf)?;
                    }
                }
            }
        }
        Ok(())
    }
}
