use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_VEHICLE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a025_vehicle (
        id TEXT PRIMARY KEY NOT NULL,
        product_name TEXT,
        product_version TEXT,
        vin TEXT,
        status TEXT,
        dealer_name TEXT,
        color TEXT,
        price REAL,
        manufacture_year INTEGER,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT
    );
"#;

const CREATE_VEHICLE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_a025_vehicle_status ON a025_vehicle (status);",
    "CREATE INDEX IF NOT EXISTS idx_a025_vehicle_dealer ON a025_vehicle (dealer_name);",
];

/// SQLite URL для пути к файлу БД
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        CREATE_VEHICLE_TABLE.to_string(),
    ))
    .await?;
    for sql in CREATE_VEHICLE_INDEXES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

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
