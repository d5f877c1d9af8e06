//! 学生图片存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::pictures::{ActiveModel, Column, Entity as Pictures};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    pictures::{
        entities::Picture,
        requests::{CreatePictureRequest, PictureListQuery},
        responses::PictureListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_picture_impl(&self, req: CreatePictureRequest) -> Result<Picture> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            image_url: Set(req.image_url),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "保存图片失败"))?;

        Ok(result.into_picture())
    }

    pub async fn get_picture_by_id_impl(&self, picture_id: i64) -> Result<Option<Picture>> {
        let result = Pictures::find_by_id(picture_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询图片失败: {e}")))?;

        Ok(result.map(|m| m.into_picture()))
    }

    pub async fn list_pictures_with_pagination_impl(
        &self,
        query: PictureListQuery,
    ) -> Result<PictureListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Pictures::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let paginator = select.order_by_asc(Column::Id).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询图片总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询图片页数失败: {e}")))?;

        // 超出末页时不再查询
        let pictures = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询图片列表失败: {e}")))?
        };

        Ok(PictureListResponse {
            items: pictures.into_iter().map(|m| m.into_picture()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    pub async fn delete_picture_impl(&self, picture_id: i64) -> Result<bool> {
        let result = Pictures::delete_by_id(picture_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除图片失败"))?;

        Ok(result.rows_affected > 0)
    }
}
