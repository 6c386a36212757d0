//! Chart service
//!
//! Aggregate figures for the admin dashboard, one method per chart.

use tracing::instrument;

use crate::dto::{
    ContributorChartResponse, DepartmentCountResponse, DepartmentPercentageResponse, IdeaResponse,
    TotalsResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Number of ideas shown on the dashboard listing
const DASHBOARD_IDEA_LIMIT: i64 = 50;

/// Chart service
pub struct ChartService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChartService<'a> {
    /// Create a new ChartService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Contributors per department
    #[instrument(skip(self))]
    pub async fn contributors_by_department(
        &self,
    ) -> ServiceResult<Vec<ContributorChartResponse>> {
        let rows = self.ctx.chart_repo().contributors_by_department().await?;

        Ok(rows
            .into_iter()
            .map(|r| ContributorChartResponse {
                department_id: r.department_id.to_string(),
                department_name: r.department_name,
                contributors: r.contributors,
                members: r.members,
            })
            .collect())
    }

    /// Idea count per department
    #[instrument(skip(self))]
    pub async fn ideas_by_department(&self) -> ServiceResult<Vec<DepartmentCountResponse>> {
        let rows = self.ctx.chart_repo().ideas_by_department().await?;
        Ok(rows
            .into_iter()
            .map(|r| DepartmentCountResponse {
                department_id: r.department_id.to_string(),
                department_name: r.department_name,
                count: r.count,
            })
            .collect())
    }

    /// Share of all ideas contributed by each department
    #[instrument(skip(self))]
    pub async fn percentage_of_ideas_by_department(
        &self,
    ) -> ServiceResult<Vec<DepartmentPercentageResponse>> {
        let rows = self.ctx.chart_repo().ideas_by_department().await?;
        let total: i64 = rows.iter().map(|r| r.count).sum();

        Ok(rows
            .into_iter()
            .map(|r| {
                let percentage = if total > 0 {
                    (r.count as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                DepartmentPercentageResponse {
                    department_id: r.department_id.to_string(),
                    department_name: r.department_name,
                    count: r.count,
                    percentage,
                }
            })
            .collect())
    }

    /// Comment count per department
    #[instrument(skip(self))]
    pub async fn comments_by_department(&self) -> ServiceResult<Vec<DepartmentCountResponse>> {
        let rows = self.ctx.chart_repo().comments_by_department().await?;
        Ok(rows
            .into_iter()
            .map(|r| DepartmentCountResponse {
                department_id: r.department_id.to_string(),
                department_name: r.department_name,
                count: r.count,
            })
            .collect())
    }

    /// Anonymous-idea count per department
    #[instrument(skip(self))]
    pub async fn anonymous_ideas_by_department(
        &self,
    ) -> ServiceResult<Vec<DepartmentCountResponse>> {
        let rows = self.ctx.chart_repo().anonymous_ideas_by_department().await?;
        Ok(rows
            .into_iter()
            .map(|r| DepartmentCountResponse {
                department_id: r.department_id.to_string(),
                department_name: r.department_name,
                count: r.count,
            })
            .collect())
    }

    /// Staff, idea, comment, and topic totals
    #[instrument(skip(self))]
    pub async fn totals(&self) -> ServiceResult<TotalsResponse> {
        let totals = self.ctx.chart_repo().totals().await?;
        Ok(TotalsResponse {
            staff: totals.staff,
            ideas: totals.ideas,
            comments: totals.comments,
            topics: totals.topics,
        })
    }

    /// Recent ideas for the dashboard listing
    #[instrument(skip(self))]
    pub async fn ideas_for_dashboard(&self) -> ServiceResult<Vec<IdeaResponse>> {
        let ideas = self
            .ctx
            .chart_repo()
            .ideas_for_dashboard(DASHBOARD_IDEA_LIMIT)
            .await?;
        Ok(ideas.iter().map(IdeaResponse::from).collect())
    }
}
