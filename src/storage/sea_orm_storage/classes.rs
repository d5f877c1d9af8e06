//! 班级存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::class::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            class_name: Set(req.class_name.trim().to_string()),
            section: Set(req.section.trim().to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建班级失败"))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Classes::find();

        // 分班筛选
        if let Some(ref section) = query.section
            && !section.trim().is_empty()
        {
            select = select.filter(Column::Section.eq(section.trim()));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::ClassName.like(contains_pattern(search)));
        }

        // 排序
        select = select
            .order_by_asc(Column::ClassName)
            .order_by_asc(Column::Section);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班级页数失败: {e}")))?;

        // 超出末页时不再查询
        let classes = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询班级列表失败: {e}")))?
        };

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let Some(existing) = self.get_class_by_id_impl(class_id).await? else {
            return Ok(None);
        };

        if update.class_name.is_none() && update.section.is_none() {
            return Ok(Some(existing));
        }

        let mut model = ActiveModel {
            id: Set(class_id),
            ..Default::default()
        };

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name.trim().to_string());
        }

        if let Some(section) = update.section {
            model.section = Set(section.trim().to_string());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新班级失败"))?;

        Ok(Some(updated.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除班级失败"))?;

        Ok(result.rows_affected > 0)
    }
}
