//! Shared test utilities for cultura-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use cultura_core::identity::Session;

    use crate::CatalogDb;
    use crate::service::CatalogService;

    /// Create an in-memory `CatalogService`.
    pub async fn test_service() -> CatalogService {
        let db = CatalogDb::open_local(":memory:").await.unwrap();
        CatalogService::from_db(db)
    }

    /// A signed-in session for write paths.
    pub fn user_session() -> Session {
        Session::authenticated("user_test")
    }
}
