pub mod entities;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests {
    use super::entities::{AttendanceStatus, AttendanceSummary};
    use super::requests::AttendanceSubmission;
    use crate::utils::form::FormPairs;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_summary_percentage() {
        assert_eq!(AttendanceSummary::from_counts(8, 10).percentage, 80);
        assert_eq!(AttendanceSummary::from_counts(0, 0).percentage, 0);
        assert_eq!(AttendanceSummary::from_counts(2, 3).percentage, 67);
        assert_eq!(AttendanceSummary::from_counts(5, 5).percentage, 100);
        // 12.5 取偶
        assert_eq!(AttendanceSummary::from_counts(1, 8).percentage, 12);
    }

    #[test]
    fn test_submission_marks_unchecked_students_absent() {
        let raw = pairs(&[
            ("att_date", "2025-03-01"),
            ("class_id", "1"),
            ("subject_id", "2"),
            ("student_ids", "10"),
            ("student_ids", "11"),
            ("student_ids", "12"),
            ("present", "10"),
            ("present", "12"),
        ]);
        let sub = AttendanceSubmission::from_pairs(&FormPairs::new(&raw)).unwrap();
        assert_eq!(sub.date, "2025-03-01");
        let statuses: Vec<_> = sub.entries.iter().map(|e| (e.student_id, e.status)).collect();
        assert_eq!(
            statuses,
            vec![
                (10, AttendanceStatus::Present),
                (11, AttendanceStatus::Absent),
                (12, AttendanceStatus::Present),
            ]
        );
    }

    #[test]
    fn test_submission_requires_valid_date() {
        let raw = pairs(&[
            ("att_date", "yesterday"),
            ("class_id", "1"),
            ("subject_id", "2"),
        ]);
        assert!(AttendanceSubmission::from_pairs(&FormPairs::new(&raw)).is_err());

        let raw = pairs(&[("att_date", "2025-03-01"), ("class_id", "1")]);
        assert!(AttendanceSubmission::from_pairs(&FormPairs::new(&raw)).is_err());
    }

    #[test]
    fn test_submission_without_students_is_empty() {
        let raw = pairs(&[
            ("att_date", "2025-03-01"),
            ("class_id", "1"),
            ("subject_id", "2"),
        ]);
        let sub = AttendanceSubmission::from_pairs(&FormPairs::new(&raw)).unwrap();
        assert!(sub.entries.is_empty());
    }
}
