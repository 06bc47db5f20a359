//! 学生档案存储操作
//!
//! 创建学生会同时创建登录账号，两步写入在同一事务中完成；
//! 删除学生时一并删除其账号。

use super::{SeaOrmStorage, write_error};
use crate::entity::classes::Entity as Classes;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{Result, SchoolError};
use crate::models::{
    students::{
        entities::{Student, StudentIdentity},
        requests::{CreateStudent, UpdateStudentForm},
        responses::StudentWithClass,
    },
    users::entities::UserRole,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建学生及其登录账号
    pub async fn create_student_impl(&self, req: CreateStudent) -> Result<Student> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        // 未指定学号时按现有学生数量生成
        let roll_number = match req.roll_number {
            Some(roll) => roll,
            None => {
                let existing = Students::find()
                    .count(&txn)
                    .await
                    .map_err(|e| SchoolError::database_operation(format!("统计学生数量失败: {e}")))?;
                format!("S{}", existing + 1000)
            }
        };

        let user = UserActiveModel {
            name: Set(req.name.clone()),
            email: Set(req.email.clone()),
            password_hash: Set(req.password_hash),
            role: Set(UserRole::Student.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_error("创建学生账号失败"))?;

        let student = ActiveModel {
            user_id: Set(Some(user.id)),
            name: Set(req.name),
            dob: Set(req.dob),
            gender: Set(req.gender),
            address: Set(req.address),
            parent_name: Set(req.parent_name),
            parent_cnic: Set(req.parent_cnic),
            phone: Set(req.phone),
            email: Set(req.email),
            class_id: Set(req.class_id),
            roll_number: Set(roll_number),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_error("创建学生档案失败"))?;

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(student.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过 ID 获取学生（附带班级名称）
    pub async fn get_student_with_class_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<StudentWithClass>> {
        let result = Students::find_by_id(student_id)
            .find_also_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(student, class)| StudentWithClass {
            student: student.into_student(),
            class_name: class.map(|c| c.class_name),
        }))
    }

    /// 通过学号获取学生（附带班级名称）
    pub async fn get_student_by_roll_number_impl(
        &self,
        roll_number: &str,
    ) -> Result<Option<StudentWithClass>> {
        let result = Students::find()
            .filter(Column::RollNumber.eq(roll_number))
            .find_also_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(student, class)| StudentWithClass {
            student: student.into_student(),
            class_name: class.map(|c| c.class_name),
        }))
    }

    /// 通过登录邮箱解析学生 ID 与班级 ID
    pub async fn find_student_identity_by_email_impl(
        &self,
        email: &str,
    ) -> Result<Option<StudentIdentity>> {
        let result = Students::find()
            .select_only()
            .column(Column::Id)
            .column(Column::ClassId)
            .filter(Column::Email.eq(email))
            .into_tuple::<(i64, Option<i64>)>()
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生身份失败: {e}")))?;

        Ok(result.map(|(student_id, class_id)| StudentIdentity {
            student_id,
            class_id,
        }))
    }

    /// 列出全部学生（最新在前，附带班级名称）
    pub async fn list_students_with_class_impl(&self) -> Result<Vec<StudentWithClass>> {
        let rows = Students::find()
            .find_also_related(Classes)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(student, class)| StudentWithClass {
                student: student.into_student(),
                class_name: class.map(|c| c.class_name),
            })
            .collect())
    }

    /// 列出某班级的学生名册
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let rows = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::RollNumber)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生档案（邮箱、学号不变）
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentForm,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(student_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(student_id),
            name: Set(update.name),
            dob: Set(update.dob),
            gender: Set(update.gender),
            address: Set(update.address),
            parent_name: Set(update.parent_name),
            parent_cnic: Set(update.parent_cnic),
            phone: Set(update.phone),
            class_id: Set(update.class_id),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新学生失败: {e}")))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生档案及其登录账号
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(student) = Students::find_by_id(student_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?
        else {
            return Ok(false);
        };

        Students::delete_by_id(student.id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学生失败: {e}")))?;

        if let Some(user_id) = student.user_id {
            Users::delete_by_id(user_id)
                .exec(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("删除学生账号失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
