//! 费用类型实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub type_id: i64,
    #[sea_orm(unique)]
    pub type_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fee::Entity")]
    Fees,
}

impl Related<super::fee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_type(self) -> crate::models::fee_types::entities::FeeType {
        crate::models::fee_types::entities::FeeType {
            type_id: self.type_id,
            type_name: self.type_name,
        }
    }
}
