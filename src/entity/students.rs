//! 学生档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub parent_cnic: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub class_id: Option<i64>,
    #[sea_orm(unique)]
    pub roll_number: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        crate::models::students::entities::Student {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            dob: self.dob,
            gender: self.gender,
            address: self.address,
            parent_name: self.parent_name,
            parent_cnic: self.parent_cnic,
            phone: self.phone,
            email: self.email,
            class_id: self.class_id,
            roll_number: self.roll_number,
        }
    }
}
