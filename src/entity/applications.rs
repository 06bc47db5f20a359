//! 学生申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub send_to: String,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_application(self) -> crate::models::applications::entities::Application {
        use crate::models::applications::entities::{Application, ApplicationStatus};
        use chrono::{DateTime, Utc};

        Application {
            id: self.id,
            student_id: self.student_id,
            subject: self.subject,
            details: self.details,
            send_to: self.send_to,
            status: self
                .status
                .parse::<ApplicationStatus>()
                .unwrap_or(ApplicationStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
