//! # idea-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface for handler crates
pub use dto::{
    AuthResponse, CommentResponse, ContributorChartResponse, CreateCommentRequest,
    CreateIdeaRequest, DepartmentCountResponse, DepartmentPercentageResponse, DepartmentRequest,
    DepartmentResponse, HealthResponse, IdeaResponse, LoginRequest, LogoutRequest,
    ReactionRequest, ReactionResponse, ReadinessResponse, RefreshTokenRequest, RegisterRequest,
    TopicRequest, TopicResponse, TotalsResponse, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, ChartService, CommentService, DepartmentService, IdeaService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TopicService, UserService,
};
