//! 课程资料存储操作

use super::SeaOrmStorage;
use crate::entity::lectures::{ActiveModel, Column, Entity as Lectures, Model};
use crate::errors::{Result, SchoolError};
use crate::models::lectures::{
    entities::Lecture, requests::CreateLecture, responses::LectureWithNames,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 上传资料
    pub async fn create_lecture_impl(&self, req: CreateLecture) -> Result<Lecture> {
        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            file_name: Set(req.file_name),
            subject_id: Set(req.subject_id),
            class_id: Set(req.class_id),
            teacher_id: Set(req.teacher_id),
            kind: Set(req.kind.to_string()),
            due_date: Set(req.due_date),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("上传资料失败: {e}")))?;

        Ok(result.into_lecture())
    }

    /// 教师上传的资料
    pub async fn list_lectures_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<LectureWithNames>> {
        let rows = Lectures::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询资料列表失败: {e}")))?;

        self.lectures_with_names(rows).await
    }

    /// 班级可见的资料
    pub async fn list_lectures_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<LectureWithNames>> {
        let rows = Lectures::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询资料列表失败: {e}")))?;

        self.lectures_with_names(rows).await
    }

    pub async fn count_lectures_by_teacher_impl(&self, teacher_id: i64) -> Result<u64> {
        Lectures::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计资料数量失败: {e}")))
    }

    async fn lectures_with_names(&self, rows: Vec<Model>) -> Result<Vec<LectureWithNames>> {
        let subject_names = self.subject_names(rows.iter().map(|r| r.subject_id)).await?;
        let class_names = self.class_names(rows.iter().map(|r| r.class_id)).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let subject_name = subject_names.get(&r.subject_id).cloned();
                let class_name = class_names.get(&r.class_id).cloned();
                LectureWithNames {
                    lecture: r.into_lecture(),
                    subject_name,
                    class_name,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lectures::entities::MaterialKind;

    fn material(title: &str, class_id: i64, teacher_id: i64, kind: MaterialKind) -> CreateLecture {
        CreateLecture {
            title: title.into(),
            description: None,
            file_name: Some(format!("{title}.pdf")),
            subject_id: 1,
            class_id,
            teacher_id,
            kind,
            due_date: None,
        }
    }

    #[tokio::test]
    async fn test_lectures_by_teacher_and_class() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class_impl("Five").await.unwrap();

        storage
            .create_lecture_impl(material("Fractions", class.id, 1, MaterialKind::Lecture))
            .await
            .unwrap();
        let homework = storage
            .create_lecture_impl(material("Worksheet", class.id, 1, MaterialKind::Assignment))
            .await
            .unwrap();
        storage
            .create_lecture_impl(material("Poems", 99, 2, MaterialKind::Lecture))
            .await
            .unwrap();

        assert_eq!(homework.kind, MaterialKind::Assignment);
        assert_eq!(storage.count_lectures_by_teacher_impl(1).await.unwrap(), 2);

        let for_class = storage.list_lectures_by_class_impl(class.id).await.unwrap();
        assert_eq!(for_class.len(), 2);
        assert_eq!(for_class[0].lecture.title, "Worksheet");
        assert_eq!(for_class[0].class_name.as_deref(), Some("Five"));
        assert!(for_class[0].subject_name.is_none());

        let by_teacher = storage.list_lectures_by_teacher_impl(2).await.unwrap();
        assert_eq!(by_teacher.len(), 1);
        assert!(by_teacher[0].class_name.is_none());
    }
}
