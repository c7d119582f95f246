use std::sync::Arc;

use course_core::model::Course;
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, CourseSession};

use crate::context::{UiApp, build_app_context};

use super::course::{CourseRoot, CourseScreen};

struct TestApp {
    course: Arc<Course>,
}

impl UiApp for TestApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Props, Clone)]
struct SessionHarnessProps {
    session: CourseSession,
}

impl PartialEq for SessionHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionHarness(props: SessionHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        course: Arc::clone(props.session.course()),
    });
    use_context_provider(|| build_app_context(&app));
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| session);
    rsx! { CourseScreen {} }
}

#[derive(Props, Clone)]
struct RootHarnessProps {
    course: Arc<Course>,
}

impl PartialEq for RootHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn RootHarness(props: RootHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        course: Arc::clone(&props.course),
    });
    use_context_provider(|| build_app_context(&app));
    rsx! { CourseRoot {} }
}

pub fn embedded_course() -> Arc<Course> {
    Arc::new(storage::parse_course(storage::EMBEDDED_COURSE_JSON).expect("embedded course"))
}

pub fn fresh_session() -> CourseSession {
    CourseSession::new(embedded_course(), fixed_clock())
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render the course screen for an already prepared session.
pub fn render_session(session: CourseSession) -> String {
    let mut dom = VirtualDom::new_with_props(SessionHarness, SessionHarnessProps { session });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

/// Render the app body the way the composition root mounts it.
pub fn render_root(course: Arc<Course>) -> String {
    let mut dom = VirtualDom::new_with_props(RootHarness, RootHarnessProps { course });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}
