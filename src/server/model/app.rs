use sea_orm::DatabaseConnection;

/// State shared by every request handler.
///
/// The connection is a pool handle, cloning it is cheap and shares the pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the relational store
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
