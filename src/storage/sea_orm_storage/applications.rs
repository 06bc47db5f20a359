//! 学生申请存储操作

use super::SeaOrmStorage;
use crate::entity::applications::{ActiveModel, Column, Entity as Applications};
use crate::errors::{Result, SchoolError};
use crate::models::applications::{
    entities::{Application, ApplicationAction, ApplicationStatus},
    requests::ApplicationForm,
    responses::ApplicationWithStudent,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 提交申请，初始状态为 Pending
    pub async fn create_application_impl(
        &self,
        student_id: i64,
        req: ApplicationForm,
    ) -> Result<Application> {
        let send_to = req.recipient().to_string();
        let model = ActiveModel {
            student_id: Set(student_id),
            subject: Set(req.subject),
            details: Set(req.details),
            send_to: Set(send_to),
            status: Set(ApplicationStatus::PENDING.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交申请失败: {e}")))?;

        Ok(result.into_application())
    }

    /// 全部申请（附带学生姓名、学号）
    pub async fn list_applications_with_student_impl(
        &self,
    ) -> Result<Vec<ApplicationWithStudent>> {
        let rows = Applications::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询申请列表失败: {e}")))?;

        let students = self.students_by_id(rows.iter().map(|r| r.student_id)).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let student = students.get(&r.student_id);
                ApplicationWithStudent {
                    student_name: student.map(|s| s.name.clone()),
                    roll_number: student.map(|s| s.roll_number.clone()),
                    application: r.into_application(),
                }
            })
            .collect())
    }

    /// 学生本人的申请
    pub async fn list_applications_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Application>> {
        let rows = Applications::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询申请列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_application()).collect())
    }

    /// 审批申请：仅 Pending 状态可变更，返回是否发生变更
    pub async fn transition_application_impl(
        &self,
        application_id: i64,
        action: ApplicationAction,
    ) -> Result<bool> {
        let target = action.target_status();
        let result = Applications::update_many()
            .col_expr(Column::Status, Expr::value(target.as_str()))
            .filter(Column::Id.eq(application_id))
            .filter(Column::Status.eq(ApplicationStatus::PENDING))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新申请状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_pending_applications_by_student_impl(&self, student_id: i64) -> Result<u64> {
        Applications::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(ApplicationStatus::PENDING))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计待审批申请失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(send_to: Option<&str>) -> ApplicationForm {
        ApplicationForm {
            subject: "Leave request".into(),
            details: Some("Family event".into()),
            send_to: send_to.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_default_recipient_and_pending_status() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let app = storage.create_application_impl(3, leave(None)).await.unwrap();
        assert_eq!(app.send_to, "Admin");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(
            storage
                .count_pending_applications_by_student_impl(3)
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_only_pending_applications_transition() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let app = storage
            .create_application_impl(3, leave(Some("Principal")))
            .await
            .unwrap();

        assert!(
            storage
                .transition_application_impl(app.id, ApplicationAction::Approve)
                .await
                .unwrap()
        );
        // 已审批的申请不可再驳回
        assert!(
            !storage
                .transition_application_impl(app.id, ApplicationAction::Reject)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .transition_application_impl(app.id + 100, ApplicationAction::Approve)
                .await
                .unwrap()
        );

        let apps = storage.list_applications_by_student_impl(3).await.unwrap();
        assert_eq!(apps[0].status, ApplicationStatus::Approved);
        assert_eq!(
            storage
                .count_pending_applications_by_student_impl(3)
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_admin_list_tolerates_missing_student() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage.create_application_impl(42, leave(None)).await.unwrap();

        let apps = storage.list_applications_with_student_impl().await.unwrap();
        assert_eq!(apps.len(), 1);
        assert!(apps[0].student_name.is_none());
        assert!(apps[0].roll_number.is_none());
    }
}
