//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChartRepository, CommentRepository, ContributorsByDepartment, CountByDepartment,
    DepartmentRepository, IdeaRepository, ReactionRepository, RefreshTokenRecord,
    RefreshTokenRepository, RepoResult, SiteTotals, TopicRepository, UserRepository,
};
