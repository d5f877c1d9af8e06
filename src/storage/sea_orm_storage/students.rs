//! 学生存储操作

use super::{SeaOrmStorage, pagination_info};
use crate::entity::student::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationQuery,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            name: Set(req.name),
            father_name: Set(req.father_name),
            father_cnic: Set(req.father_cnic),
            mother_name: Set(req.mother_name),
            mother_cnic: Set(req.mother_cnic),
            phone: Set(req.phone),
            email: Set(req.email),
            address: Set(req.address),
            roll_no: Set(req.roll_no),
            class_id: Set(req.class_id),
            fee_id: Set(req.fee_id),
            profile_pic: Set(req.profile_pic),
            admission_date: Set(req.admission_date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "创建学生失败"))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Students::find();

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 按姓名或学号搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search.trim())))
                    .add(Column::RollNo.like(contains_pattern(search.trim()))),
            );
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询学生页数失败: {e}")))?;

        // 超出末页时不再查询
        let students = if page > pages {
            Vec::new()
        } else {
            paginator
                .fetch_page(page - 1)
                .await
                .map_err(|e| SchoolSysError::database_operation(format!("查询学生列表失败: {e}")))?
        };

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: pagination_info(page, size, total, pages),
        })
    }

    /// 更新学生信息，仅写入请求中出现的字段
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = self.get_student_by_id_impl(student_id).await? else {
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(existing));
        }

        let mut model = ActiveModel {
            id: Set(student_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(father_name) = update.father_name {
            model.father_name = Set(Some(father_name));
        }
        if let Some(father_cnic) = update.father_cnic {
            model.father_cnic = Set(Some(father_cnic));
        }
        if let Some(mother_name) = update.mother_name {
            model.mother_name = Set(Some(mother_name));
        }
        if let Some(mother_cnic) = update.mother_cnic {
            model.mother_cnic = Set(Some(mother_cnic));
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(email) = update.email {
            model.email = Set(Some(email));
        }
        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }
        if let Some(roll_no) = update.roll_no {
            model.roll_no = Set(roll_no);
        }
        if let Some(class_id) = update.class_id {
            model.class_id = Set(Some(class_id));
        }
        if let Some(fee_id) = update.fee_id {
            model.fee_id = Set(Some(fee_id));
        }
        if let Some(profile_pic) = update.profile_pic {
            model.profile_pic = Set(Some(profile_pic));
        }
        if let Some(admission_date) = update.admission_date {
            model.admission_date = Set(Some(admission_date));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "更新学生失败"))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::from_db(e, "删除学生失败"))?;

        Ok(result.rows_affected > 0)
    }
}
