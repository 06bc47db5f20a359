//! 首页统计

use super::SeaOrmStorage;
use crate::entity::applications::{Column as ApplicationColumn, Entity as Applications};
use crate::entity::prelude::{Announcements, Classes, Students, Subjects, Teachers};
use crate::errors::{Result, SchoolError};
use crate::models::{applications::entities::ApplicationStatus, dashboard::responses::AdminStats};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 管理员首页各项计数
    pub async fn admin_stats_impl(&self) -> Result<AdminStats> {
        let count_err = |e: DbErr| SchoolError::database_operation(format!("统计数据失败: {e}"));

        let teachers = Teachers::find().count(&self.db).await.map_err(count_err)?;
        let students = Students::find().count(&self.db).await.map_err(count_err)?;
        let classes = Classes::find().count(&self.db).await.map_err(count_err)?;
        let subjects = Subjects::find().count(&self.db).await.map_err(count_err)?;
        let announcements = Announcements::find()
            .count(&self.db)
            .await
            .map_err(count_err)?;
        let applications = Applications::find().count(&self.db).await.map_err(count_err)?;
        let pending_applications = Applications::find()
            .filter(ApplicationColumn::Status.eq(ApplicationStatus::PENDING))
            .count(&self.db)
            .await
            .map_err(count_err)?;

        Ok(AdminStats {
            teachers,
            students,
            classes,
            subjects,
            announcements,
            applications,
            pending_applications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::applications::{entities::ApplicationAction, requests::ApplicationForm};

    #[tokio::test]
    async fn test_admin_stats_counts() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        assert_eq!(storage.admin_stats_impl().await.unwrap(), AdminStats::default());

        storage.create_class_impl("One").await.unwrap();
        storage.create_class_impl("Two").await.unwrap();
        for subject in ["Leave", "Transfer"] {
            storage
                .create_application_impl(
                    1,
                    ApplicationForm {
                        subject: subject.into(),
                        details: None,
                        send_to: None,
                    },
                )
                .await
                .unwrap();
        }
        let apps = storage.list_applications_by_student_impl(1).await.unwrap();
        storage
            .transition_application_impl(apps[0].id, ApplicationAction::Reject)
            .await
            .unwrap();

        let stats = storage.admin_stats_impl().await.unwrap();
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.applications, 2);
        assert_eq!(stats.pending_applications, 1);
        assert_eq!(stats.students, 0);
    }
}
