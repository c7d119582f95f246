mod certificate;
mod course;
mod diagram;
mod module_content;
mod quiz;
mod sidebar;
mod simulation;
mod video;

pub use certificate::CertificateView;
pub use course::CourseRoot;
pub use diagram::DiagramView;
pub use module_content::ModuleContent;
pub use quiz::QuizPanel;
pub use sidebar::Sidebar;
pub use simulation::SimulationWidget;
pub use video::VideoBlock;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
