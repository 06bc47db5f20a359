//! 教师授课分配存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::teacher_subjects::{ActiveModel, Column, Entity as TeacherSubjects};
use crate::errors::{Result, SchoolError};
use crate::models::{
    qa::responses::ClassTeacherOption,
    teacher_subjects::{
        entities::TeacherSubject, requests::AssignSubjectForm, responses::AssignmentDetail,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 新增授课分配
    pub async fn assign_subject_impl(&self, req: AssignSubjectForm) -> Result<TeacherSubject> {
        let model = ActiveModel {
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建授课分配失败: {e}")))?;

        Ok(result.into_teacher_subject())
    }

    /// 列出授课分配（附带名称），可按教师筛选
    pub async fn list_assignments_impl(
        &self,
        teacher_id: Option<i64>,
    ) -> Result<Vec<AssignmentDetail>> {
        let mut select = TeacherSubjects::find();
        if let Some(teacher_id) = teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询授课分配失败: {e}")))?;

        let teacher_names = self.teacher_names(rows.iter().map(|r| r.teacher_id)).await?;
        let subject_names = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;
        let class_names = self.class_names(rows.iter().map(|r| r.class_id)).await?;

        Ok(rows
            .into_iter()
            .map(|r| AssignmentDetail {
                id: r.id,
                teacher_id: r.teacher_id,
                teacher_name: teacher_names.get(&r.teacher_id).cloned(),
                subject_id: r.subject_id,
                subject_name: subject_names.get(&r.subject_id).cloned(),
                class_id: r.class_id,
                class_name: class_names.get(&r.class_id).cloned(),
            })
            .collect())
    }

    /// 教师是否负责指定班级的指定科目
    pub async fn teacher_has_assignment_impl(
        &self,
        teacher_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<bool> {
        let count = TeacherSubjects::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::SubjectId.eq(subject_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询授课分配失败: {e}")))?;

        Ok(count > 0)
    }

    /// 删除授课分配
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = TeacherSubjects::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除授课分配失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某班级的任课教师及科目，按 (教师, 科目) 去重
    ///
    /// 教师或科目已被删除的分配不会出现在结果中。
    pub async fn list_class_teachers_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<ClassTeacherOption>> {
        let rows = TeacherSubjects::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询任课教师失败: {e}")))?;

        let teacher_names = self.teacher_names(rows.iter().map(|r| r.teacher_id)).await?;
        let subject_names = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;

        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for r in rows {
            let (Some(teacher_name), Some(subject_name)) = (
                teacher_names.get(&r.teacher_id),
                subject_names.get(&r.subject_id),
            ) else {
                continue;
            };
            if seen.insert((r.teacher_id, r.subject_id)) {
                options.push(ClassTeacherOption {
                    teacher_id: r.teacher_id,
                    teacher_name: teacher_name.clone(),
                    subject_id: r.subject_id,
                    subject_name: subject_name.clone(),
                });
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subjects::requests::SubjectForm;
    use crate::models::teachers::requests::CreateTeacher;

    async fn seed(storage: &SeaOrmStorage) -> (i64, i64, i64) {
        let class = storage.create_class_impl("Six").await.unwrap();
        let subject = storage
            .create_subject_impl(SubjectForm {
                subject_name: "English".into(),
                class_id: Some(class.id),
            })
            .await
            .unwrap();
        let teacher = storage
            .create_teacher_impl(CreateTeacher {
                name: "Hina".into(),
                email: "hina@school.test".into(),
                password_hash: "hash".into(),
                dob: None,
                gender: None,
                phone: None,
                address: None,
                cnic: None,
            })
            .await
            .unwrap();
        (teacher.id, class.id, subject.id)
    }

    #[tokio::test]
    async fn test_assignment_details_and_check() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let (teacher_id, class_id, subject_id) = seed(&storage).await;
        let assignment = storage
            .assign_subject_impl(AssignSubjectForm {
                teacher_id,
                subject_id,
                class_id,
            })
            .await
            .unwrap();

        let details = storage.list_assignments_impl(Some(teacher_id)).await.unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].teacher_name.as_deref(), Some("Hina"));
        assert_eq!(details[0].subject_name.as_deref(), Some("English"));
        assert_eq!(details[0].class_name.as_deref(), Some("Six"));
        assert!(storage.list_assignments_impl(Some(teacher_id + 1)).await.unwrap().is_empty());

        assert!(
            storage
                .teacher_has_assignment_impl(teacher_id, class_id, subject_id)
                .await
                .unwrap()
        );
        assert!(
            !storage
                .teacher_has_assignment_impl(teacher_id, class_id, subject_id + 1)
                .await
                .unwrap()
        );

        assert!(storage.delete_assignment_impl(assignment.id).await.unwrap());
        assert!(
            !storage
                .teacher_has_assignment_impl(teacher_id, class_id, subject_id)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_class_teachers_are_distinct() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let (teacher_id, class_id, subject_id) = seed(&storage).await;
        for _ in 0..2 {
            storage
                .assign_subject_impl(AssignSubjectForm {
                    teacher_id,
                    subject_id,
                    class_id,
                })
                .await
                .unwrap();
        }

        let options = storage.list_class_teachers_impl(class_id).await.unwrap();
        assert_eq!(
            options,
            vec![ClassTeacherOption {
                teacher_id,
                teacher_name: "Hina".into(),
                subject_id,
                subject_name: "English".into(),
            }]
        );
        assert!(storage.list_class_teachers_impl(class_id + 1).await.unwrap().is_empty());
    }
}
