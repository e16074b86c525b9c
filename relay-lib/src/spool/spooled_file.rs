use std::path::{Path, PathBuf};

use relay_proto::dto::FileKind;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};
use uuid::Uuid;

const BUF_SIZE: usize = 1024 * 8;

/// One uploaded file parked on disk until the relay call completes.
#[derive(Debug, Clone)]
pub struct SpooledFile {
    pub id: String,
    pub file_name: String,
    pub content_type: String,
    pub kind: FileKind,
    pub size: u64,
    pub path: PathBuf,
}

/// The transient file set of a single upload request. Dropping the spool
/// removes every file it created, partially written ones included.
#[derive(Debug)]
pub struct Spool {
    dir: PathBuf,
    paths: Vec<PathBuf>,
    files: Vec<SpooledFile>,
}

impl Spool {
    pub async fn create(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            tokio::fs::create_dir_all(&dir).await?;
        }
        Ok(Self {
            dir,
            paths: Vec::new(),
            files: Vec::new(),
        })
    }

    /// Opens a writer for one incoming file. The path is tracked for cleanup
    /// before the first byte is written.
    pub async fn attach(
        &mut self,
        file_name: &str,
        content_type: &str,
        kind: FileKind,
    ) -> std::io::Result<SpoolWriter> {
        let id = Uuid::new_v4().to_string();
        let stored_name = match Path::new(file_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.clone(),
        };
        let path = self.dir.join(stored_name);
        let file = File::create(&path).await?;
        self.paths.push(path.clone());
        log::debug!("Spooling {} to {:?}", file_name, path);

        Ok(SpoolWriter {
            file: SpooledFile {
                id,
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                kind,
                size: 0,
                path,
            },
            writer: BufWriter::with_capacity(BUF_SIZE, file),
        })
    }

    pub fn commit(&mut self, file: SpooledFile) {
        self.files.push(file);
    }

    pub fn files(&self) -> &[SpooledFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Removes every spooled file, partial ones included. Callers run this
    /// on every exit path; `Drop` only covers unwinds that skip it.
    pub async fn cleanup(&mut self) {
        self.files.clear();
        for path in self.paths.drain(..) {
            match tokio::fs::remove_file(&path).await {
                Ok(_) => log::debug!("Removed spooled file {:?}", path),
                Err(e) => log::warn!("Failed to remove spooled file {:?}: {}", path, e),
            }
        }
    }
}

impl Drop for Spool {
    fn drop(&mut self) {
        for path in &self.paths {
            match std::fs::remove_file(path) {
                Ok(_) => log::debug!("Removed spooled file {:?}", path),
                Err(e) => log::warn!("Failed to remove spooled file {:?}: {}", path, e),
            }
        }
    }
}

pub struct SpoolWriter {
    file: SpooledFile,
    writer: BufWriter<File>,
}

impl SpoolWriter {
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> std::io::Result<()> {
        self.writer.write_all(chunk).await?;
        self.file.size += chunk.len() as u64;
        Ok(())
    }

    pub fn size(&self) -> u64 {
        self.file.size
    }

    pub async fn finish(mut self) -> std::io::Result<SpooledFile> {
        self.writer.flush().await?;
        Ok(self.file)
    }
}
