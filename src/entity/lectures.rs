//! 课程资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lectures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub file_name: Option<String>,
    pub subject_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub kind: String,
    pub due_date: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lecture(self) -> crate::models::lectures::entities::Lecture {
        use crate::models::lectures::entities::{Lecture, MaterialKind};
        use chrono::{DateTime, Utc};

        Lecture {
            id: self.id,
            title: self.title,
            description: self.description,
            file_name: self.file_name,
            subject_id: self.subject_id,
            class_id: self.class_id,
            teacher_id: self.teacher_id,
            kind: self.kind.parse::<MaterialKind>().unwrap_or_default(),
            due_date: self.due_date,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
