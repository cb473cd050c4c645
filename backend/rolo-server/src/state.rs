use sqlx::SqlitePool;

/// Shared application state handed to request handlers.
///
/// Built once at startup from the connected [`rolo_db::Database`] handle;
/// handlers clone the pool out of it per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
