//! Request and response DTOs

mod requests;
mod responses;

pub use requests::{
    CreatureActionRequest, CreatureDataRequest, EndGameRequest, GetCodeRequest,
    SendVerificationRequest, SignupRequest, StartGameRequest,
};
pub use responses::{
    CreatureResponse, EndGameResponse, GameCodeResponse, HealthResponse, MessageResponse,
    ReadinessResponse, RosterResponse, UserExistsResponse, VerificationCodeResponse,
    VerificationSentResponse,
};
