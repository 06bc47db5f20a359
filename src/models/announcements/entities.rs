use serde::{Deserialize, Serialize};

// 公告面向的对象
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementAudience {
    #[default]
    All,
    Students,
    Teachers,
}

impl std::fmt::Display for AnnouncementAudience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementAudience::All => write!(f, "all"),
            AnnouncementAudience::Students => write!(f, "students"),
            AnnouncementAudience::Teachers => write!(f, "teachers"),
        }
    }
}

impl std::str::FromStr for AnnouncementAudience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AnnouncementAudience::All),
            "students" => Ok(AnnouncementAudience::Students),
            "teachers" => Ok(AnnouncementAudience::Teachers),
            _ => Err(format!("Invalid announcement audience: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub details: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub assigned_to: AnnouncementAudience,
    pub created_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Announcement {
    /// 结束日期为空或不早于 `today` 时仍然有效
    pub fn is_active_on(&self, today: &str) -> bool {
        self.end_date.as_deref().is_none_or(|end| end >= today)
    }
}
