//! Account entity <-> model mapper

use critter_core::entities::Account;

use crate::models::AccountModel;

impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            email: model.email,
            username: model.username,
            password: model.password,
            gender: model.gender,
            created_at: model.created_at,
        }
    }
}
