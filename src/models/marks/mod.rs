pub mod entities;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod tests {
    use super::requests::{MarkEntry, MarksSubmission};
    use crate::utils::form::FormPairs;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_marks_default_to_zero() {
        let raw = pairs(&[
            ("class_id", "1"),
            ("subject_id", "2"),
            ("exam_type", "Midterm"),
            ("total_marks", "100"),
            ("student_ids", "5"),
            ("student_ids", "6"),
            ("student_ids", "7"),
            ("marks_5", "88"),
            ("marks_7", ""),
        ]);
        let sub = MarksSubmission::from_pairs(&FormPairs::new(&raw)).unwrap();
        assert_eq!(sub.total_marks, 100);
        assert_eq!(sub.exam_type, "Midterm");
        assert_eq!(
            sub.entries,
            vec![
                MarkEntry {
                    student_id: 5,
                    marks_obtained: 88
                },
                MarkEntry {
                    student_id: 6,
                    marks_obtained: 0
                },
                MarkEntry {
                    student_id: 7,
                    marks_obtained: 0
                },
            ]
        );
    }

    #[test]
    fn test_marks_fields_matched_by_student_id() {
        let raw = pairs(&[
            ("class_id", "1"),
            ("subject_id", "2"),
            ("exam_type", "Final"),
            ("total_marks", "50"),
            ("student_ids", "5"),
            ("student_ids", "6"),
            ("marks_6", " 41 "),
            ("marks_5", "30"),
            ("marks_5", "45"),
            ("marks_99", "12"),
            ("marks_x", "oops"),
            ("remarks_5", "7"),
        ]);
        let sub = MarksSubmission::from_pairs(&FormPairs::new(&raw)).unwrap();
        assert_eq!(
            sub.entries,
            vec![
                MarkEntry {
                    student_id: 5,
                    marks_obtained: 30
                },
                MarkEntry {
                    student_id: 6,
                    marks_obtained: 41
                },
            ]
        );
    }

    #[test]
    fn test_invalid_marks_rejected() {
        let raw = pairs(&[
            ("class_id", "1"),
            ("subject_id", "2"),
            ("exam_type", "Final"),
            ("total_marks", "100"),
            ("student_ids", "5"),
            ("marks_5", "eighty"),
        ]);
        assert!(MarksSubmission::from_pairs(&FormPairs::new(&raw)).is_err());

        let raw = pairs(&[("class_id", "1"), ("subject_id", "2"), ("exam_type", "Final")]);
        assert!(MarksSubmission::from_pairs(&FormPairs::new(&raw)).is_err());
    }
}
