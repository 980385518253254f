use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCompletionRepository, DbEventRepository, DbMemberRepository, DbMissionRepository,
    DbRegistrationRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Event every request is scoped to.
    pub event_code: String,
    /// Site base for mission page URLs.
    pub site_url: String,
}

impl AppState {
    pub fn event_repo(&self) -> DbEventRepository {
        DbEventRepository {
            db: self.db.clone(),
        }
    }

    pub fn registration_repo(&self) -> DbRegistrationRepository {
        DbRegistrationRepository {
            db: self.db.clone(),
        }
    }

    pub fn member_repo(&self) -> DbMemberRepository {
        DbMemberRepository {
            db: self.db.clone(),
        }
    }

    pub fn mission_repo(&self) -> DbMissionRepository {
        DbMissionRepository {
            db: self.db.clone(),
        }
    }

    pub fn completion_repo(&self) -> DbCompletionRepository {
        DbCompletionRepository {
            db: self.db.clone(),
        }
    }
}
