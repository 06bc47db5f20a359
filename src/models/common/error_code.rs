use serde::{Deserialize, Serialize};

/// 业务错误码，随 `ApiResponse` 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,
    TeacherProfileNotFound = 2001,
    StudentProfileNotFound = 2002,

    // 用户与档案
    UserEmailAlreadyExists = 3000,
    UserCreationFailed = 3001,
    RollNumberAlreadyExists = 3002,

    // 班级与科目
    ClassAlreadyExists = 4000,
    SubjectAssignmentRequired = 4001,

    // 学费
    FeeAlreadyExists = 5000,

    // 申请
    ApplicationActionInvalid = 6000,
}
