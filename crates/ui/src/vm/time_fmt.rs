use chrono::{DateTime, Utc};

/// Long-form date for the certificate, e.g. "November 14, 2023".
#[must_use]
pub fn format_issue_date(value: DateTime<Utc>) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::time::fixed_now;

    #[test]
    fn issue_date_is_human_readable() {
        assert_eq!(format_issue_date(fixed_now()), "November 14, 2023");
    }
}
