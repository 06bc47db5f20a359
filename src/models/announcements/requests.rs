use serde::Deserialize;

use super::entities::AnnouncementAudience;
use crate::utils::form::{empty_as_iso_date, empty_as_none};

// 发布公告表单
#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncementForm {
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub assigned_to: Option<AnnouncementAudience>,
}

// 存储层创建公告参数
#[derive(Debug, Clone)]
pub struct CreateAnnouncement {
    pub title: String,
    pub details: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assigned_to: AnnouncementAudience,
    pub created_by: i64,
}

impl AnnouncementForm {
    /// 转换为存储参数，`audience` 为 `None` 时使用表单值（默认 all）
    pub fn into_create(
        self,
        created_by: i64,
        audience: Option<AnnouncementAudience>,
    ) -> CreateAnnouncement {
        CreateAnnouncement {
            title: self.title,
            details: self.details,
            start_date: self.start_date,
            end_date: self.end_date,
            assigned_to: audience.or(self.assigned_to).unwrap_or_default(),
            created_by,
        }
    }
}
