use sea_orm::DatabaseConnection;

use crate::domain::types::RegistrationPolicy;
use crate::infra::db::{
    DbAccountRepository, DbApplicationRepository, DbCatalogRepository, DbOtpRepository,
    DbProfileRepository, DbSessionRepository,
};
use crate::infra::notify::TracingNotifier;
use crate::infra::password::Argon2Hasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub policy: RegistrationPolicy,
}

impl AppState {
    pub fn account_repo(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }

    pub fn application_repo(&self) -> DbApplicationRepository {
        DbApplicationRepository {
            db: self.db.clone(),
        }
    }

    pub fn catalog_repo(&self) -> DbCatalogRepository {
        DbCatalogRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn notifier(&self) -> TracingNotifier {
        TracingNotifier
    }

    pub fn hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }
}
