use std::io;
use std::sync::{Arc, Mutex};

/// An in-memory log sink shared between a test and its subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}

impl io::Write for CapturedLogs {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// Runs `f` with a thread-local subscriber and returns what it logged.
pub fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
  let logs = CapturedLogs::default();
  let writer = logs.clone();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(move || writer.clone())
    .with_ansi(false)
    .finish();

  let result = tracing::subscriber::with_default(subscriber, f);
  (result, logs.contents())
}
