//! Department entity <-> model mapper

use idea_core::entities::Department;

use crate::models::DepartmentModel;

impl From<DepartmentModel> for Department {
    fn from(model: DepartmentModel) -> Self {
        Department {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
