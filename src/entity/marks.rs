//! 成绩实体，(student_id, subject_id, exam_type) 唯一

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub exam_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mark(self) -> crate::models::marks::entities::MarkRecord {
        crate::models::marks::entities::MarkRecord {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            class_id: self.class_id,
            marks_obtained: self.marks_obtained,
            total_marks: self.total_marks,
            exam_type: self.exam_type,
        }
    }
}
