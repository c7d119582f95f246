mod certificate_vm;
mod course_vm;
mod quiz_vm;
mod simulation_vm;
mod time_fmt;

pub use certificate_vm::CertificateVm;
pub use course_vm::{ModuleHeaderVm, ModuleListItemVm, NavFooterVm, map_module_list};
pub use quiz_vm::{QuizFeedbackVm, QuizOptionState, QuizOptionVm, QuizVm};
pub use simulation_vm::{SimulationNodeVm, SimulationVm};
pub use time_fmt::format_issue_date;
