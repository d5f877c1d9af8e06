//! 费用类型存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::fee_types::{ActiveModel, Column, Entity as FeeTypes};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    fee_types::{
        entities::FeeType,
        requests::{FeeTypeListQuery, FeeTypeRequest},
        responses::FeeTypeListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_fee_type_impl(&self, req: FeeTypeRequest) -> Result<FeeType> {
        let model = ActiveModel {
            type_name: Set(req.type_name.trim().to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建费用类型失败"))?;

        Ok(result.into_fee_type())
    }

    pub async fn get_fee_type_by_id_impl(&self, type_id: i64) -> Result<Option<FeeType>> {
        let result = FeeTypes::find_by_id(type_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询费用类型失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_type()))
    }

    pub async fn list_fee_types_with_pagination_impl(
        &self,
        query: FeeTypeListQuery,
    ) -> Result<FeeTypeListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = FeeTypes::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::TypeName.like(contains_pattern(search)));
        }

        let paginator = select.order_by_asc(Column::TypeId).paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSysError::database_operation(format!("查询费用类型总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSysError::database_operation(format!("查询费用类型页数失败: {e}"))
        })?;

        // 超出末页时不再查询
        let fee_types = if page > pages {
            Vec::new()
        } else {
            paginator.fetch_page(page - 1).await.map_err(|e| {
                SchoolSysError::database_operation(format!("查询费用类型列表失败: {e}"))
            })?
        };

        Ok(FeeTypeListResponse {
            items: fee_types.into_iter().map(|m| m.into_fee_type()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    pub async fn update_fee_type_impl(
        &self,
        type_id: i64,
        update: FeeTypeRequest,
    ) -> Result<Option<FeeType>> {
        if self.get_fee_type_by_id_impl(type_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            type_id: Set(type_id),
            type_name: Set(update.type_name.trim().to_string()),
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新费用类型失败"))?;

        Ok(Some(updated.into_fee_type()))
    }

    pub async fn delete_fee_type_impl(&self, type_id: i64) -> Result<bool> {
        let result = FeeTypes::delete_by_id(type_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除费用类型失败"))?;

        Ok(result.rows_affected > 0)
    }
}
