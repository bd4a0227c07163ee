// src/infrastructure/renderer.rs
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::Builder;
use tracing::{debug, instrument};

/// Writes rendered preview pages to disk and hands them to the browser.
#[derive(Debug, Default)]
pub struct PreviewWriter;

impl PreviewWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write `html` to `out`, or to a kept temp file when no path is given.
    #[instrument(level = "debug", skip(self, html), fields(bytes = html.len()))]
    pub fn write(&self, html: &str, out: Option<&Path>) -> Result<PathBuf> {
        let file_path = match out {
            Some(path) => {
                File::create(path)
                    .with_context(|| format!("Failed to create preview file at {}", path.display()))?
                    .write_all(html.as_bytes())
                    .context("Failed to write preview file")?;
                path.to_path_buf()
            }
            None => {
                let mut file = Builder::new()
                    .prefix("lessondesk-preview-")
                    .suffix(".html")
                    .rand_bytes(5)
                    .tempfile()
                    .context("Failed to create temporary preview file")?;
                file.write_all(html.as_bytes())
                    .context("Failed to write preview file")?;
                // Outlives the process so the browser can still read it
                let (_, path) = file.keep().context("Failed to keep preview file")?;
                path
            }
        };

        debug!(path = %file_path.display(), "Wrote preview");
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        opener_command(path)
            .spawn()
            .with_context(|| format!("Failed to open {} in a browser", path.display()))?;
        Ok(())
    }
}

#[cfg(target_os = "macos")]
const OPENER: (&str, &[&str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Platform command that hands `path` to the default browser.
fn opener_command(path: &Path) -> Command {
    let (program, args) = OPENER;
    let mut command = Command::new(program);
    command.args(args).arg(path);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_no_out_path_when_writing_then_creates_temp_file() {
        let writer = PreviewWriter::new();

        let path = writer.write("<html></html>", None).unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("lessondesk-preview-"));
        assert!(name.ends_with(".html"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn given_out_path_when_writing_then_writes_there() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("preview.html");
        let writer = PreviewWriter::new();

        let path = writer.write("<p>hi</p>", Some(&out)).unwrap();

        assert_eq!(path, out);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn given_unwritable_path_when_writing_then_error() {
        let writer = PreviewWriter::new();

        let result = writer.write("x", Some(Path::new("/nonexistent/dir/preview.html")));

        assert!(result.is_err());
    }

    #[test]
    fn given_preview_path_when_building_opener_then_path_is_last_argument() {
        let path = Path::new("/tmp/lessondesk-preview-abc.html");

        let command = opener_command(path);

        assert_eq!(command.get_program(), OPENER.0);
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args.len(), OPENER.1.len() + 1);
        assert_eq!(args.last(), Some(&path.as_os_str()));
    }
}
