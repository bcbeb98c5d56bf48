use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const DEFAULT_COMPONENT: &str = "store";

/// `Logger` adapter that forwards use-case messages to `tracing`, tagging each
/// event with the component that produced it.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT)
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Backend -- ", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Backend -- ", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Backend -- ", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Backend -- ", component = self.component, "{}", message);
    }
}
