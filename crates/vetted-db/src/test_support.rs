//! Shared test utilities for vetted-db unit tests.

pub(crate) mod helpers {
    use vetted_core::entities::Project;

    use crate::VettedDb;
    use crate::service::VettedService;

    /// Create an in-memory `VettedService`.
    pub async fn test_service() -> VettedService {
        let db = VettedDb::open_local(":memory:").await.unwrap();
        VettedService::from_db(db)
    }

    /// Create a bare project owned by `user-owner`.
    pub async fn test_project(svc: &VettedService) -> Project {
        svc.create_project("user-owner").await.unwrap()
    }
}
