use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;

use super::migration_runner;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Build a sqlite connection URL, normalizing Windows paths
pub fn build_sqlite_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the database file, apply migrations and keep the connection for handlers
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Opening database: {}", absolute_path.display());

    migration_runner::run_migrations(&db_url).await?;

    let conn = Database::connect(&db_url).await?;
    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sqlite_url_unix() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/lib/upd/app.db")),
            "sqlite:///var/lib/upd/app.db?mode=rwc"
        );
    }

    #[test]
    fn test_build_sqlite_url_windows() {
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }
}
