use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/* Every user-visible notice goes through here. The UI drains `messages` into the log pane when `has_changed` is
 * set. On the command line there is no log pane, so messages are echoed as they arrive. */
#[derive(Clone, Default)]
pub struct Logger {
    pub messages: Arc<RwLock<Vec<String>>>,
    pub has_changed: Arc<AtomicBool>,
    echo: bool,
}

impl Logger {
    pub fn stdout() -> Self {
        Self {
            echo: true,
            ..Default::default()
        }
    }

    pub fn log<S: Into<String>>(&self, msg: S) {
        let msg = msg.into();
        if self.echo {
            println!("{msg}");
        }
        if let Ok(mut lock) = self.messages.write() {
            lock.push(msg);
        }
        self.has_changed.store(true, Ordering::Relaxed);
    }

    pub fn info<S: AsRef<str>>(&self, msg: S) {
        self.log(format!("Info: {}", msg.as_ref()));
    }

    pub fn warn<S: AsRef<str>>(&self, msg: S) {
        self.log(format!("Warn: {}", msg.as_ref()));
    }

    pub fn error<S: AsRef<str>>(&self, msg: S) {
        self.log(format!("Error: {}", msg.as_ref()));
    }

    // Used by tests to look at what the user would have been shown
    #[cfg(test)]
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.read().map(|msgs| msgs.iter().any(|m| m.contains(needle))).unwrap_or(false)
    }
}
