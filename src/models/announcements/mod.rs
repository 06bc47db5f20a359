pub mod entities;
pub mod requests;

#[cfg(test)]
mod tests {
    use super::entities::{Announcement, AnnouncementAudience};
    use super::requests::AnnouncementForm;

    fn announcement(end_date: Option<&str>) -> Announcement {
        Announcement {
            id: 1,
            title: "Sports day".into(),
            details: None,
            start_date: None,
            end_date: end_date.map(String::from),
            assigned_to: AnnouncementAudience::All,
            created_by: None,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_active_window() {
        assert!(announcement(None).is_active_on("2025-03-01"));
        assert!(announcement(Some("2025-03-01")).is_active_on("2025-03-01"));
        assert!(announcement(Some("2025-04-01")).is_active_on("2025-03-01"));
        assert!(!announcement(Some("2025-02-28")).is_active_on("2025-03-01"));
    }

    #[test]
    fn test_audience_defaults_and_override() {
        let form = AnnouncementForm {
            title: "Exams".into(),
            details: None,
            start_date: None,
            end_date: None,
            assigned_to: None,
        };
        assert_eq!(
            form.clone().into_create(1, None).assigned_to,
            AnnouncementAudience::All
        );

        let form = AnnouncementForm {
            assigned_to: Some(AnnouncementAudience::Teachers),
            ..form
        };
        assert_eq!(
            form.into_create(1, Some(AnnouncementAudience::Students))
                .assigned_to,
            AnnouncementAudience::Students
        );
    }
}
