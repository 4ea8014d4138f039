//! Artifact sinks.
//!
//! The collector hands each raw field response to a sink under its artifact
//! label; how artifacts are persisted (and how failures are reported) is the
//! sink's concern, not the collector's.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Receives raw metadata responses labeled by artifact name.
pub trait ArtifactSink {
    /// Record one artifact. Called at most once per label per run.
    fn record(&mut self, artifact: &str, body: &[u8]) -> io::Result<()>;
}

/// Sink that writes each artifact as a file in a directory, the way a
/// diagnostic bundle lays out command output.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory artifacts are written into.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl ArtifactSink for DirectorySink {
    fn record(&mut self, artifact: &str, body: &[u8]) -> io::Result<()> {
        fs::write(self.dir.join(artifact), body)
    }
}

/// In-memory sink recording artifacts in arrival order, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Recorded `(label, body)` pairs.
    pub artifacts: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of recorded artifacts, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.artifacts.iter().map(|(label, _)| label.as_str()).collect()
    }
}

impl ArtifactSink for MemorySink {
    fn record(&mut self, artifact: &str, body: &[u8]) -> io::Result<()> {
        self.artifacts.push((artifact.to_string(), body.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path()).unwrap();
        sink.record("aws_metadata_hostname.txt", b"ip-10-0-0-1").unwrap();

        let written = fs::read(dir.path().join("aws_metadata_hostname.txt")).unwrap();
        assert_eq!(written, b"ip-10-0-0-1");
    }

    #[test]
    fn test_directory_sink_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("bundle").join("aws");
        let sink = DirectorySink::new(&nested).unwrap();
        assert!(sink.dir().is_dir());
    }

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.record("a.txt", b"1").unwrap();
        sink.record("b.txt", b"2").unwrap();
        assert_eq!(sink.labels(), ["a.txt", "b.txt"]);
        assert_eq!(sink.artifacts[1].1, b"2");
    }
}
