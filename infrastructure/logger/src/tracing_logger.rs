use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "StudentOrgs -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "StudentOrgs -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "StudentOrgs -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "StudentOrgs -- ", "{}", message);
    }
}
