//! 公告存储操作

use super::SeaOrmStorage;
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements};
use crate::errors::{Result, SchoolError};
use crate::models::announcements::{entities::Announcement, requests::CreateAnnouncement};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

impl SeaOrmStorage {
    /// 发布公告
    pub async fn create_announcement_impl(&self, req: CreateAnnouncement) -> Result<Announcement> {
        let model = ActiveModel {
            title: Set(req.title),
            details: Set(req.details),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            assigned_to: Set(req.assigned_to.to_string()),
            created_by: Set(Some(req.created_by)),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("发布公告失败: {e}")))?;

        Ok(result.into_announcement())
    }

    /// 列出公告（最新在前），可按发布人筛选
    pub async fn list_announcements_impl(
        &self,
        created_by: Option<i64>,
    ) -> Result<Vec<Announcement>> {
        let mut select = Announcements::find();
        if let Some(user_id) = created_by {
            select = select.filter(Column::CreatedBy.eq(user_id));
        }

        let rows = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 最近发布的公告
    pub async fn list_recent_announcements_impl(&self, limit: u64) -> Result<Vec<Announcement>> {
        let rows = Announcements::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询最近公告失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 仍在有效期内的公告：结束日期为空或不早于 `today`
    pub async fn list_active_announcements_impl(
        &self,
        today: &str,
        limit: u64,
    ) -> Result<Vec<Announcement>> {
        let rows = Announcements::find()
            .filter(
                Condition::any()
                    .add(Column::EndDate.gte(today))
                    .add(Column::EndDate.is_null()),
            )
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询有效公告失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_announcement()).collect())
    }

    /// 删除公告
    pub async fn delete_announcement_impl(&self, announcement_id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(announcement_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除公告失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
