/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::SscError;
use std::{
    fs::{File, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    time::Duration,
};

/// What to do when the output file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputPolicy {
    /// Fail.
    #[default]
    CreateNew,
    /// Truncate the existing file.
    Overwrite,
    /// Use the first free name of the form `stem_N.ext`, with `N` starting
    /// from zero.
    Unique,
}

/// Creates the output file according to `policy`, returning it together
/// with the path actually used.
pub fn create_output(
    path: impl AsRef<Path>,
    policy: OutputPolicy,
) -> Result<(File, PathBuf), SscError> {
    let path = path.as_ref();
    match policy {
        OutputPolicy::Overwrite => Ok((File::create(path)?, path.to_owned())),
        OutputPolicy::CreateNew => Ok((create_new(path)?, path.to_owned())),
        OutputPolicy::Unique => match create_new(path) {
            Ok(file) => Ok((file, path.to_owned())),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                log::warn!("Output file {} already exists", path.display());
                let mut attempt = 0;
                loop {
                    let candidate = numbered(path, attempt);
                    match create_new(&candidate) {
                        Ok(file) => {
                            log::info!("Using unique output file {}", candidate.display());
                            return Ok((file, candidate));
                        }
                        Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            Err(e) => Err(e.into()),
        },
    }
}

fn create_new(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

/// Returns `stem_N.ext` in the directory of `path`.
fn numbered(path: &Path, n: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, n, ext.to_string_lossy()),
        None => format!("{}_{}", stem, n),
    };
    path.with_file_name(name)
}

/// Writes a closure with a short header.
///
/// The header records the name of the input and the elapsed time; then, after
/// a `"Vertex"` column title, each vertex is written quoted on its own line.
///
/// # Examples
/// ```
/// # use hybrid_ssc::io::write_closure;
/// # use std::time::Duration;
/// let mut out = Vec::new();
/// write_closure(&mut out, "graph.txt", Duration::from_millis(1500), &[0, 2])?;
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "# Run of SSC12 on input graph.txt\n# Elapsed time: 1.5 seconds\n\"Vertex\"\n\"0\"\n\"2\"\n"
/// );
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn write_closure(
    mut writer: impl Write,
    input_name: &str,
    elapsed: Duration,
    closure: &[usize],
) -> std::io::Result<()> {
    writeln!(writer, "# Run of SSC12 on input {}", input_name)?;
    writeln!(writer, "# Elapsed time: {} seconds", elapsed.as_secs_f64())?;
    writeln!(writer, "\"Vertex\"")?;
    for vertex in closure {
        writeln!(writer, "\"{}\"", vertex)?;
    }
    writer.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    #[test]
    fn test_policies() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("closure.txt");

        let (_, used) = create_output(&path, OutputPolicy::CreateNew)?;
        assert_eq!(used, path);
        assert!(matches!(
            create_output(&path, OutputPolicy::CreateNew),
            Err(SscError::Io(e)) if e.kind() == ErrorKind::AlreadyExists
        ));

        let (_, used) = create_output(&path, OutputPolicy::Unique)?;
        assert_eq!(used, dir.path().join("closure_0.txt"));
        let (_, used) = create_output(&path, OutputPolicy::Unique)?;
        assert_eq!(used, dir.path().join("closure_1.txt"));

        fs::write(&path, "old")?;
        let (file, used) = create_output(&path, OutputPolicy::Overwrite)?;
        assert_eq!(used, path);
        write_closure(file, "input", Duration::ZERO, &[7])?;
        assert_eq!(
            fs::read_to_string(&path)?,
            "# Run of SSC12 on input input\n# Elapsed time: 0 seconds\n\"Vertex\"\n\"7\"\n"
        );
        Ok(())
    }

    #[test]
    fn test_numbered_without_extension() {
        assert_eq!(
            numbered(Path::new("out/closure"), 3),
            PathBuf::from("out/closure_3")
        );
    }
}
