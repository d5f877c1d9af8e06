//! 考勤存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    attendance::{
        entities::Attendance,
        requests::{AttendanceListQuery, CreateAttendanceRequest, UpdateAttendanceRequest},
        responses::AttendanceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 登记考勤
    pub async fn create_attendance_impl(&self, req: CreateAttendanceRequest) -> Result<Attendance> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            date: Set(req.date),
            status: Set(req.status.to_string()),
            remarks: Set(req.remarks),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "登记考勤失败"))?;

        Ok(result.into_attendance())
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, attendance_id: i64) -> Result<Option<Attendance>> {
        let result = AttendanceRecords::find_by_id(attendance_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 分页列出考勤记录，按日期倒序
    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = AttendanceRecords::find();

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(date) = query.date {
            select = select.filter(Column::Date.eq(date));
        }
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::Date).order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询考勤页数失败: {e}")))?;

        // 超出末页时不再查询
        let records = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询考勤列表失败: {e}")))?
        };

        Ok(AttendanceListResponse {
            items: records.into_iter().map(|m| m.into_attendance()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 更新考勤记录
    pub async fn update_attendance_impl(
        &self,
        attendance_id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        let Some(existing) = self.get_attendance_by_id_impl(attendance_id).await? else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(attendance_id),
            ..Default::default()
        };
        let mut changed = false;

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
            changed = true;
        }
        if let Some(date) = update.date {
            model.date = Set(date);
            changed = true;
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
            changed = true;
        }
        if let Some(remarks) = update.remarks {
            model.remarks = Set(Some(remarks));
            changed = true;
        }

        if !changed {
            return Ok(Some(existing));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新考勤失败"))?;

        Ok(Some(updated.into_attendance()))
    }

    /// 删除考勤记录
    pub async fn delete_attendance_impl(&self, attendance_id: i64) -> Result<bool> {
        let result = AttendanceRecords::delete_by_id(attendance_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除考勤失败"))?;

        Ok(result.rows_affected > 0)
    }
}
