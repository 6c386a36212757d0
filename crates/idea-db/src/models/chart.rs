//! Chart query row models

use sqlx::FromRow;
use uuid::Uuid;

/// Grouped count keyed by department
#[derive(Debug, Clone, FromRow)]
pub struct CountByDepartmentModel {
    pub department_id: Uuid,
    pub department_name: String,
    pub count: i64,
}

/// Contributor statistics row for one department
#[derive(Debug, Clone, FromRow)]
pub struct ContributorsByDepartmentModel {
    pub department_id: Uuid,
    pub department_name: String,
    pub contributors: i64,
    pub members: i64,
}

/// Site-wide totals row
#[derive(Debug, Clone, FromRow)]
pub struct SiteTotalsModel {
    pub staff: i64,
    pub ideas: i64,
    pub comments: i64,
    pub topics: i64,
}
