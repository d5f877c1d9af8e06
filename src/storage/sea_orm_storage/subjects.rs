//! 科目存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::subject::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest},
        responses::SubjectListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let model = ActiveModel {
            subject_name: Set(req.subject_name.trim().to_string()),
            teacher_id: Set(req.teacher_id),
            description: Set(req.description),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建科目失败"))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_with_pagination_impl(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Subjects::find();

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::SubjectName.like(contains_pattern(search)));
        }

        let paginator = select
            .order_by_asc(Column::SubjectId)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询科目总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询科目页数失败: {e}")))?;

        // 超出末页时不再查询
        let subjects = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询科目列表失败: {e}")))?
        };

        Ok(SubjectListResponse {
            items: subjects.into_iter().map(|m| m.into_subject()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let Some(existing) = self.get_subject_by_id_impl(subject_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            subject_id: Set(subject_id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(subject_name) = update.subject_name {
            model.subject_name = Set(subject_name.trim().to_string());
            changed = true;
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
            changed = true;
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新科目失败"))?;

        Ok(Some(updated.into_subject()))
    }

    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除科目失败"))?;

        Ok(result.rows_affected > 0)
    }
}
