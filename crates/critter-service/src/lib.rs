//! # critter-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreatureActionRequest, CreatureDataRequest, CreatureResponse, EndGameRequest,
    EndGameResponse, GameCodeResponse, GetCodeRequest, HealthResponse, MessageResponse,
    ReadinessResponse, RosterResponse, SendVerificationRequest, SignupRequest,
    StartGameRequest, UserExistsResponse, VerificationCodeResponse, VerificationSentResponse,
};
pub use services::{
    AccountService, GameService, RosterService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, VerificationService,
};
