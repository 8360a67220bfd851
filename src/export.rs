use std::path::{Path, PathBuf};
use std::process::Command;

use crate::RenderedTimesheet;
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    /// Write the PDF into the output directory.
    Download,
    /// Hand the PDF to the platform share command, saving it instead when
    /// sharing is unavailable or fails.
    Share,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Shared(PathBuf),
}

pub fn save(rendered: &RenderedTimesheet, output_dir: &Path) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(&rendered.filename);
    std::fs::write(&path, &rendered.bytes)?;
    Ok(path)
}

/// Run `command` (program followed by arguments, whitespace-separated) with
/// the staged PDF path appended.
fn share(rendered: &RenderedTimesheet, command: &str) -> Result<PathBuf, Error> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| Error::Export("empty share command".into()))?;

    let staged = std::env::temp_dir().join(&rendered.filename);
    std::fs::write(&staged, &rendered.bytes)?;

    let status = Command::new(program)
        .args(parts)
        .arg(&staged)
        .status()
        .map_err(|e| Error::Export(format!("cannot run {program}: {e}")))?;
    if !status.success() {
        return Err(Error::Export(format!("{program} exited with {status}")));
    }
    Ok(staged)
}

pub fn export(
    rendered: &RenderedTimesheet,
    mode: ExportMode,
    output_dir: &Path,
    share_command: Option<&str>,
) -> Result<ExportOutcome, Error> {
    let t0 = std::time::Instant::now();
    if mode == ExportMode::Share {
        match share_command {
            Some(command) => match share(rendered, command) {
                Ok(path) => {
                    log::info!(
                        "Shared {} in {:.1}ms",
                        rendered.filename,
                        t0.elapsed().as_secs_f64() * 1000.0
                    );
                    return Ok(ExportOutcome::Shared(path));
                }
                Err(e) => log::warn!("Sharing failed: {e}; saving instead"),
            },
            None => log::warn!("No share command configured; saving instead"),
        }
    }

    let path = save(rendered, output_dir)?;
    log::info!(
        "Saved {} in {:.1}ms",
        path.display(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(ExportOutcome::Saved(path))
}
