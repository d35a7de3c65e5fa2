use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

/// Write the candidate list to `path`, one entry per line, newline
/// terminated, UTF-8. Write failures propagate to the caller untouched.
pub(crate) fn write_list(path: &Path, candidates: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for candidate in candidates {
        writeln!(writer, "{candidate}")?;
    }
    writer.flush()?;

    info!("Wrote {} candidates to {}", candidates.len(), path.display());
    Ok(())
}
