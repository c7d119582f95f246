use services::CourseSession;

use crate::vm::time_fmt::format_issue_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub course_title: String,
    pub author: String,
    pub issued_on: Option<String>,
}

impl CertificateVm {
    #[must_use]
    pub fn from_session(session: &CourseSession) -> Self {
        match session.certificate() {
            Some(certificate) => Self {
                course_title: certificate.course_title().to_string(),
                author: certificate.author().to_string(),
                issued_on: Some(format_issue_date(certificate.issued_at())),
            },
            None => Self {
                course_title: session.course().title().to_string(),
                author: session.course().author().to_string(),
                issued_on: None,
            },
        }
    }
}
