//! 考勤存储操作
//!
//! 批量提交按 (student_id, subject_id, date) 唯一索引做 upsert，
//! 重复提交只更新状态。

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as Attendance};
use crate::errors::{Result, SchoolError};
use crate::models::attendance::{
    entities::{AttendanceStatus, AttendanceSummary},
    requests::AttendanceSubmission,
    responses::AttendanceWithSubject,
};
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::OnConflict,
};

impl SeaOrmStorage {
    /// 批量写入考勤，返回处理的学生数
    pub async fn upsert_attendance_impl(&self, submission: &AttendanceSubmission) -> Result<usize> {
        if submission.entries.is_empty() {
            return Ok(0);
        }

        let on_conflict = OnConflict::columns([Column::StudentId, Column::SubjectId, Column::Date])
            .update_columns([Column::Status, Column::ClassId])
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
                date: Set(submission.date.clone()),
                status: Set(entry.status.to_string()),
                ..Default::default()
            };

            Attendance::insert(model)
                .on_conflict(on_conflict.clone())
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("保存考勤失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submission.entries.len())
    }

    /// 学生考勤记录（日期倒序，附带科目名称）
    pub async fn list_attendance_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<AttendanceWithSubject>> {
        let rows = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let subject_names = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let subject_name = subject_names.get(&r.subject_id).cloned();
                AttendanceWithSubject {
                    record: r.into_record(),
                    subject_name,
                }
            })
            .collect())
    }

    /// 学生出勤统计
    pub async fn attendance_summary_impl(&self, student_id: i64) -> Result<AttendanceSummary> {
        let total = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计考勤失败: {e}")))?;

        let present = Attendance::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(AttendanceStatus::PRESENT))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计出勤失败: {e}")))?;

        Ok(AttendanceSummary::from_counts(present, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::requests::AttendanceEntry;

    fn submission(date: &str, entries: &[(i64, AttendanceStatus)]) -> AttendanceSubmission {
        AttendanceSubmission {
            date: date.into(),
            class_id: 1,
            subject_id: 2,
            entries: entries
                .iter()
                .map(|(student_id, status)| AttendanceEntry {
                    student_id: *student_id,
                    status: *status,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_resubmission_updates_single_row() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .upsert_attendance_impl(&submission(
                "2025-03-01",
                &[(10, AttendanceStatus::Present)],
            ))
            .await
            .unwrap();
        storage
            .upsert_attendance_impl(&submission(
                "2025-03-01",
                &[(10, AttendanceStatus::Absent)],
            ))
            .await
            .unwrap();

        let records = storage.list_attendance_for_student_impl(10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].record.status, AttendanceStatus::Absent);
    }

    #[tokio::test]
    async fn test_empty_submission_is_noop() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let saved = storage
            .upsert_attendance_impl(&submission("2025-03-01", &[]))
            .await
            .unwrap();
        assert_eq!(saved, 0);
    }

    #[tokio::test]
    async fn test_summary_counts_present_days() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        for day in 1..=10 {
            let status = if day <= 8 {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            storage
                .upsert_attendance_impl(&submission(&format!("2025-03-{day:02}"), &[(3, status)]))
                .await
                .unwrap();
        }

        let summary = storage.attendance_summary_impl(3).await.unwrap();
        assert_eq!(summary.present, 8);
        assert_eq!(summary.total, 10);
        assert_eq!(summary.percentage, 80);

        let empty = storage.attendance_summary_impl(4).await.unwrap();
        assert_eq!(empty.percentage, 0);

        let records = storage.list_attendance_for_student_impl(3).await.unwrap();
        assert_eq!(records[0].record.date, "2025-03-10");
        // 科目不存在时名称为空
        assert!(records[0].subject_name.is_none());
    }
}
