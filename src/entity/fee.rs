//! 费用实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fee_id: i64,
    pub student_id: i64,
    #[sea_orm(column_type = "Double")]
    pub amount: f64,
    pub due_date: Date,
    pub status: String,
    pub type_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::fee_types::Entity",
        from = "Column::TypeId",
        to = "super::fee_types::Column::TypeId"
    )]
    FeeType,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::fee_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee(self) -> crate::models::fees::entities::Fee {
        use crate::models::fees::entities::{Fee, FeeStatus};

        Fee {
            fee_id: self.fee_id,
            student_id: self.student_id,
            amount: self.amount,
            due_date: self.due_date,
            status: self.status.parse().unwrap_or(FeeStatus::Pending),
            type_id: self.type_id,
        }
    }
}
