//! Terminal implementations of the platform services.
//!
//! - [`TerminalNotifier`]: prints the notification from a background thread
//!   once its delay has elapsed, to stdout or stderr
//! - [`TerminalShare`]: prints a share card to stdout
//! - [`FileCamera`]: "captures" an existing image file from disk

use bmi_core::services::*;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

// ===========================================================================
// Notifications – background thread per notification
// ===========================================================================

#[derive(Default)]
pub struct TerminalNotifier {
    use_stderr: bool,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that keeps stdout free for machine-readable output
    pub fn to_stderr() -> Self {
        Self {
            use_stderr: true,
            ..Self::default()
        }
    }

    /// Block until every scheduled notification has fired
    pub fn wait(&self) {
        let handles = match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("Notification thread panicked");
            }
        }
    }
}

impl NotificationService for TerminalNotifier {
    fn schedule(&self, title: &str, body: &str, fire_delay: Duration) -> ServiceResult<()> {
        let line = format!("🔔 {}: {}", title, body);
        let use_stderr = self.use_stderr;
        let handle = std::thread::Builder::new()
            .name("bmi-notify".into())
            .spawn(move || {
                std::thread::sleep(fire_delay);
                if use_stderr {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            })?;

        self.pending
            .lock()
            .map_err(|_| ServiceError::Other("notification queue poisoned".into()))?
            .push(handle);
        tracing::debug!("Scheduled notification in {:?}", fire_delay);
        Ok(())
    }
}

// ===========================================================================
// Share – stdout card
// ===========================================================================

pub struct TerminalShare;

impl ShareService for TerminalShare {
    fn share(&self, title: &str, text: &str) -> ServiceResult<()> {
        use std::io::Write;

        let mut out = std::io::stdout().lock();
        writeln!(out)?;
        writeln!(out, "┌─ Share: {}", title)?;
        writeln!(out, "│  {}", text)?;
        writeln!(out, "└─────────────────────────────────────────")?;
        out.flush()?;
        Ok(())
    }
}

// ===========================================================================
// Camera – image file on disk
// ===========================================================================

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "heic"];

pub struct FileCamera {
    source: Option<PathBuf>,
}

impl FileCamera {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self { source }
    }
}

impl CameraService for FileCamera {
    fn capture(&self) -> ServiceResult<String> {
        let path = self.source.as_ref().ok_or_else(|| {
            ServiceError::Unavailable("no camera on this device; pass --photo <PATH>".into())
        })?;

        if !path.is_file() {
            return Err(ServiceError::Unavailable(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);
        if !is_image {
            return Err(ServiceError::Other(format!(
                "{} is not an image file",
                path.display()
            )));
        }

        let absolute = path.canonicalize().map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                ServiceError::PermissionDenied(format!("cannot read {}: {}", path.display(), e))
            }
            _ => ServiceError::Io(e),
        })?;
        Ok(format!("file://{}", absolute.display()))
    }
}
