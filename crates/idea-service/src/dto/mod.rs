//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreateIdeaRequest, DepartmentRequest, LoginRequest, LogoutRequest,
    ReactionRequest, RefreshTokenRequest, RegisterRequest, TopicRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    AuthResponse, CommentResponse, ContributorChartResponse, DepartmentCountResponse,
    DepartmentPercentageResponse, DepartmentResponse, HealthResponse, IdeaResponse,
    ReactionResponse, ReadinessResponse, TopicResponse, TotalsResponse, UserResponse,
};
