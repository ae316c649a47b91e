//! Verification record entity <-> model mapper

use critter_core::entities::VerificationRecord;

use crate::models::VerificationModel;

impl From<VerificationModel> for VerificationRecord {
    fn from(model: VerificationModel) -> Self {
        VerificationRecord {
            email: model.email,
            code: model.code,
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
