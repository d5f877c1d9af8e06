//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub father_name: Option<String>,
    pub father_cnic: Option<String>,
    pub mother_name: Option<String>,
    pub mother_cnic: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub roll_no: String,
    pub class_id: Option<i64>,
    pub fee_id: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub profile_pic: Option<String>,
    pub admission_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::fee::Entity")]
    Fees,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::pictures::Entity")]
    Pictures,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fees.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::pictures::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pictures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        crate::models::students::entities::Student {
            id: self.id,
            name: self.name,
            father_name: self.father_name,
            father_cnic: self.father_cnic,
            mother_name: self.mother_name,
            mother_cnic: self.mother_cnic,
            phone: self.phone,
            email: self.email,
            address: self.address,
            roll_no: self.roll_no,
            class_id: self.class_id,
            fee_id: self.fee_id,
            profile_pic: self.profile_pic,
            admission_date: self.admission_date,
        }
    }
}
