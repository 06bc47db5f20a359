use serde::{Deserialize, Serialize};

// 申请状态：Pending 只能转为 Approved 或 Rejected，之后不再变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const PENDING: &'static str = "Pending";
    pub const APPROVED: &'static str = "Approved";
    pub const REJECTED: &'static str = "Rejected";

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => Self::PENDING,
            ApplicationStatus::Approved => Self::APPROVED,
            ApplicationStatus::Rejected => Self::REJECTED,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ApplicationStatus::PENDING => Ok(ApplicationStatus::Pending),
            ApplicationStatus::APPROVED => Ok(ApplicationStatus::Approved),
            ApplicationStatus::REJECTED => Ok(ApplicationStatus::Rejected),
            _ => Err(format!("Invalid application status: {s}")),
        }
    }
}

// 审批动作（URL 路径中的 approve / reject）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationAction {
    Approve,
    Reject,
}

impl ApplicationAction {
    pub fn target_status(self) -> ApplicationStatus {
        match self {
            ApplicationAction::Approve => ApplicationStatus::Approved,
            ApplicationAction::Reject => ApplicationStatus::Rejected,
        }
    }
}

impl std::str::FromStr for ApplicationAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(ApplicationAction::Approve),
            "reject" => Ok(ApplicationAction::Reject),
            _ => Err(format!("Unknown application action: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub student_id: i64,
    pub subject: String,
    pub details: Option<String>,
    pub send_to: String,
    pub status: ApplicationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
