//! 教师存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::teacher::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    teachers::{
        entities::Teacher,
        requests::{TeacherListQuery, TeacherRequest},
        responses::TeacherListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, req: TeacherRequest) -> Result<Teacher> {
        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建教师失败"))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 分页列出教师
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Teachers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::Name.like(contains_pattern(search)));
        }

        let paginator = select
            .order_by_asc(Column::TeacherId)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询教师页数失败: {e}")))?;

        // 超出末页时不再查询
        let teachers = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询教师列表失败: {e}")))?
        };

        Ok(TeacherListResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 更新教师信息
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: TeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(teacher_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            name: Set(update.name.trim().to_string()),
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新教师失败"))?;

        Ok(Some(updated.into_teacher()))
    }

    /// 删除教师，其名下科目的 teacher_id 置空
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(teacher_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除教师失败"))?;

        Ok(result.rows_affected > 0)
    }
}
