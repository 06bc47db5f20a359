//! 批量名称查询
//!
//! 列表视图需要附带班级/科目/教师/学生名称，统一收集 ID 后一次查询，
//! 引用已删除的记录时对应名称为 `None`。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Students, Subjects, Teachers};
use crate::entity::{classes, students, subjects, teachers};
use crate::errors::{Result, SchoolError};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

fn dedup(ids: impl IntoIterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl SeaOrmStorage {
    /// 班级 ID -> 班级名称
    pub(crate) async fn class_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Classes::find()
            .filter(classes::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级名称失败: {e}")))?;
        Ok(rows.into_iter().map(|m| (m.id, m.class_name)).collect())
    }

    /// 科目 ID -> 科目名称
    pub(crate) async fn subject_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Subjects::find()
            .filter(subjects::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目名称失败: {e}")))?;
        Ok(rows.into_iter().map(|m| (m.id, m.subject_name)).collect())
    }

    /// 教师 ID -> 教师姓名
    pub(crate) async fn teacher_names(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Teachers::find()
            .filter(teachers::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师姓名失败: {e}")))?;
        Ok(rows.into_iter().map(|m| (m.id, m.name)).collect())
    }

    /// 学生 ID -> 学生档案
    pub(crate) async fn students_by_id(
        &self,
        ids: impl IntoIterator<Item = i64>,
    ) -> Result<HashMap<i64, students::Model>> {
        let ids = dedup(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = Students::find()
            .filter(students::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生信息失败: {e}")))?;
        Ok(rows.into_iter().map(|m| (m.id, m)).collect())
    }
}
