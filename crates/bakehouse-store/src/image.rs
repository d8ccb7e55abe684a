//! The serialization store — a durable home for exactly one database image.

use std::{
  future::Future,
  io,
  path::{Path, PathBuf},
  sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
  },
};

/// Durable byte store holding the single serialized database image.
///
/// Implementations replace the whole value on every save; there is no append
/// or partial update. Saves must be all-or-nothing: a failed save leaves the
/// previously stored image readable.
pub trait ImageStore: Send + Sync + 'static {
  /// Read the stored image, or `None` when nothing has been stored yet.
  fn load(&self) -> impl Future<Output = io::Result<Option<Vec<u8>>>> + Send + '_;

  /// Replace the stored image with `image`.
  fn save<'a>(
    &'a self,
    image: &'a [u8],
  ) -> impl Future<Output = io::Result<()>> + Send + 'a;
}

impl<T: ImageStore> ImageStore for std::sync::Arc<T> {
  async fn load(&self) -> io::Result<Option<Vec<u8>>> {
    (**self).load().await
  }

  async fn save(&self, image: &[u8]) -> io::Result<()> {
    (**self).save(image).await
  }
}

// ─── File-backed store ───────────────────────────────────────────────────────

/// Stores the image as a single file, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct FileImageStore {
  path: PathBuf,
}

impl FileImageStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl ImageStore for FileImageStore {
  async fn load(&self) -> io::Result<Option<Vec<u8>>> {
    match tokio::fs::read(&self.path).await {
      Ok(bytes) => Ok(Some(bytes)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e),
    }
  }

  async fn save(&self, image: &[u8]) -> io::Result<()> {
    // Stage beside the target and rename over it, so a crash mid-write never
    // leaves a truncated image at the fixed key.
    let mut staging = self.path.as_os_str().to_owned();
    staging.push(".staging");
    let staging = PathBuf::from(staging);
    tokio::fs::write(&staging, image).await?;
    tokio::fs::rename(&staging, &self.path).await
  }
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// In-memory store used by tests. Can simulate storage write failures and
/// counts successful saves.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
  image:       Mutex<Option<Vec<u8>>>,
  fail_writes: AtomicBool,
  saves:       AtomicUsize,
}

impl MemoryImageStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make every subsequent `save` fail, as a full or revoked store would.
  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  /// The raw stored image, as a restarted process would read it.
  pub fn stored(&self) -> Option<Vec<u8>> {
    self
      .image
      .lock()
      .unwrap_or_else(|e| e.into_inner())
      .clone()
  }

  /// Number of successful saves so far.
  pub fn save_count(&self) -> usize {
    self.saves.load(Ordering::SeqCst)
  }
}

impl ImageStore for MemoryImageStore {
  async fn load(&self) -> io::Result<Option<Vec<u8>>> {
    Ok(self.stored())
  }

  async fn save(&self, image: &[u8]) -> io::Result<()> {
    if self.fail_writes.load(Ordering::SeqCst) {
      return Err(io::Error::other("storage quota exceeded"));
    }
    *self.image.lock().unwrap_or_else(|e| e.into_inner()) =
      Some(image.to_vec());
    self.saves.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }
}
