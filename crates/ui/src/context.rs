use std::sync::Arc;

use course_core::model::Course;
use services::Clock;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course: app.course(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
