//! 费用存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::fee::{ActiveModel, Column, Entity as Fees};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    fees::{
        entities::Fee,
        requests::{CreateFeeRequest, FeeListQuery, UpdateFeeRequest},
        responses::FeeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建费用记录
    pub async fn create_fee_impl(&self, req: CreateFeeRequest) -> Result<Fee> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            amount: Set(req.amount),
            due_date: Set(req.due_date),
            status: Set(req.status.to_string()),
            type_id: Set(req.type_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建费用失败"))?;

        Ok(result.into_fee())
    }

    /// 通过 ID 获取费用记录
    pub async fn get_fee_by_id_impl(&self, fee_id: i64) -> Result<Option<Fee>> {
        let result = Fees::find_by_id(fee_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询费用失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 分页列出费用记录
    pub async fn list_fees_with_pagination_impl(
        &self,
        query: FeeListQuery,
    ) -> Result<FeeListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Fees::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(type_id) = query.type_id {
            select = select.filter(Column::TypeId.eq(type_id));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 按到期日排序
        select = select
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::FeeId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询费用总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询费用页数失败: {e}")))?;

        // 超出末页时不再查询
        let fees = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询费用列表失败: {e}")))?
        };

        Ok(FeeListResponse {
            items: fees.into_iter().map(|m| m.into_fee()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 更新费用记录
    pub async fn update_fee_impl(
        &self,
        fee_id: i64,
        update: UpdateFeeRequest,
    ) -> Result<Option<Fee>> {
        let Some(existing) = self.get_fee_by_id_impl(fee_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            fee_id: Set(fee_id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
            changed = true;
        }
        if let Some(amount) = update.amount {
            model.amount = Set(amount);
            changed = true;
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date);
            changed = true;
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
            changed = true;
        }
        if let Some(type_id) = update.type_id {
            model.type_id = Set(type_id);
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新费用失败"))?;

        Ok(Some(updated.into_fee()))
    }

    /// 删除费用记录
    pub async fn delete_fee_impl(&self, fee_id: i64) -> Result<bool> {
        let result = Fees::delete_by_id(fee_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除费用失败"))?;

        Ok(result.rows_affected > 0)
    }
}
