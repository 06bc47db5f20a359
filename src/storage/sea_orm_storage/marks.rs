//! 成绩存储操作
//!
//! 按 (student_id, subject_id, exam_type) 唯一索引做 upsert。

use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{Result, SchoolError};
use crate::models::marks::{
    entities::MarkRecord, requests::MarksSubmission, responses::MarkWithSubject,
};
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::OnConflict,
};

impl SeaOrmStorage {
    /// 批量写入成绩，返回处理的学生数
    pub async fn upsert_marks_impl(&self, submission: &MarksSubmission) -> Result<usize> {
        if submission.entries.is_empty() {
            return Ok(0);
        }

        let on_conflict =
            OnConflict::columns([Column::StudentId, Column::SubjectId, Column::ExamType])
                .update_columns([Column::MarksObtained, Column::TotalMarks, Column::ClassId])
                .to_owned();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        for entry in &submission.entries {
            let model = ActiveModel {
                student_id: Set(entry.student_id),
                subject_id: Set(submission.subject_id),
                class_id: Set(submission.class_id),
                marks_obtained: Set(entry.marks_obtained),
                total_marks: Set(submission.total_marks),
                exam_type: Set(submission.exam_type.clone()),
                ..Default::default()
            };

            Marks::insert(model)
                .on_conflict(on_conflict.clone())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("保存成绩失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submission.entries.len())
    }

    /// 指定班级、科目、考试的已录入成绩
    pub async fn list_marks_impl(
        &self,
        class_id: i64,
        subject_id: i64,
        exam_type: &str,
    ) -> Result<Vec<MarkRecord>> {
        let rows = Marks::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::ExamType.eq(exam_type))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 学生全部成绩，按科目名称排序
    pub async fn list_marks_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<MarkWithSubject>> {
        let rows = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生成绩失败: {e}")))?;

        let subject_names = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;

        let mut marks: Vec<MarkWithSubject> = rows
            .into_iter()
            .map(|r| {
                let subject_name = subject_names.get(&r.subject_id).cloned();
                MarkWithSubject {
                    record: r.into_mark(),
                    subject_name,
                }
            })
            .collect();
        marks.sort_by(|a, b| a.subject_name.cmp(&b.subject_name));

        Ok(marks)
    }
}
