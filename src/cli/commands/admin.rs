use anyhow::{bail, Context};
use clap::Subcommand;
use serde_json::json;

use crate::auth::{normalize_email, password, validate_email_format};
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;
use crate::database::{AdminRecord, AdminStore, DatabaseManager, PgAdminStore};

/// Minimum password length for newly seeded admins
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Subcommand)]
pub enum AdminCommands {
    #[command(about = "Create an admin account in the configured database")]
    Create {
        #[arg(help = "Admin email")]
        email: String,
        #[arg(long, help = "Password (falls back to ADMIN_PASSWORD)")]
        password: Option<String>,
    },

    #[command(about = "Print an Argon2 hash for manual seeding")]
    HashPassword {
        #[arg(help = "Password to hash")]
        password: String,
    },
}

pub async fn handle(
    cmd: AdminCommands,
    config: &AppConfig,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        AdminCommands::Create { email, password } => {
            let password = password
                .or_else(|| std::env::var("ADMIN_PASSWORD").ok())
                .context("password required: pass --password or set ADMIN_PASSWORD")?;

            let pool = DatabaseManager::connect(&config.database).await?;
            DatabaseManager::ensure_schema(&pool).await?;
            let store = PgAdminStore::new(pool);

            let record = create_admin(&store, &email, &password).await?;
            tracing::info!("Created admin '{}'", record.email);

            output_success(
                output_format,
                "Admin created",
                Some(json!({
                    "id": record.id,
                    "email": record.email,
                    "created_at": record.created_at,
                })),
            )
        }
        AdminCommands::HashPassword { password } => {
            check_password(&password)?;
            let hashword = password::hash(&password)?;
            output_success(output_format, "Password hashed", Some(json!({ "hash": hashword })))
        }
    }
}

/// Validate, hash and insert a new admin
pub async fn create_admin(
    store: &dyn AdminStore,
    email: &str,
    password: &str,
) -> anyhow::Result<AdminRecord> {
    let email = normalize_email(email);
    if let Err(msg) = validate_email_format(&email) {
        bail!("{}: '{}'", msg, email);
    }
    check_password(password)?;

    let hashword = password::hash(password)?;
    let record = store.insert(AdminRecord::new(email, hashword)).await?;
    Ok(record)
}

fn check_password(password: &str) -> anyhow::Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        bail!("password must be at least {} characters", MIN_PASSWORD_LENGTH);
    }
    Ok(())
}
