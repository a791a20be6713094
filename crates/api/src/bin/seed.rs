//! Seed the database with the first admin account and default singletons.
//!
//! Idempotent: existing rows are left untouched.
//!
//! | Env Var               | Required | Default   |
//! |-----------------------|----------|-----------|
//! | `DATABASE_URL`        | **yes**  | --        |
//! | `ADMIN_SEED_EMAIL`    | **yes**  | --        |
//! | `ADMIN_SEED_PASSWORD` | **yes**  | --        |
//! | `ADMIN_SEED_NAME`     | no       | --        |
//! | `SITE_NAME`           | no       | `Falcone` |

use anyhow::{bail, Context};
use falcone_api::auth::password::hash_password;
use falcone_core::enums::AdminRole;
use falcone_core::types::MAIN_SLUG;
use falcone_db::models::admin_user::CreateAdminUser;
use falcone_db::models::press_kit::UpsertPressKit;
use falcone_db::models::site_settings::UpsertSiteSettings;
use falcone_db::repositories::{AdminUserRepo, PressKitRepo, SiteSettingsRepo};
use falcone_db::DbPool;

const MIN_PASSWORD_LEN: usize = 8;

const PLACEHOLDER_BIO: &str = "Resident DJ playing the best of the seventies, \
    eighties and nineties. Edit this biography from the back office.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "falcone_seed=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = falcone_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    falcone_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    seed_admin(&pool).await?;
    seed_site_settings(&pool).await?;
    seed_press_kit(&pool).await?;

    tracing::info!("Seeding complete");
    Ok(())
}

async fn seed_admin(pool: &DbPool) -> anyhow::Result<()> {
    let email = std::env::var("ADMIN_SEED_EMAIL").context("ADMIN_SEED_EMAIL must be set")?;
    let password =
        std::env::var("ADMIN_SEED_PASSWORD").context("ADMIN_SEED_PASSWORD must be set")?;
    if password.len() < MIN_PASSWORD_LEN {
        bail!("ADMIN_SEED_PASSWORD must be at least {MIN_PASSWORD_LEN} characters");
    }

    if let Some(existing) = AdminUserRepo::find_by_email(pool, &email).await? {
        tracing::info!(user_id = existing.id, "Admin user already exists, skipping");
        return Ok(());
    }

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;

    let admin = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            email,
            password_hash,
            name: std::env::var("ADMIN_SEED_NAME").ok(),
            role: AdminRole::SuperAdmin.as_str().to_string(),
        },
    )
    .await
    .context("Failed to create admin user")?;

    tracing::info!(user_id = admin.id, email = %admin.email, "Admin user created");
    Ok(())
}

async fn seed_site_settings(pool: &DbPool) -> anyhow::Result<()> {
    if SiteSettingsRepo::find_by_slug(pool, MAIN_SLUG).await?.is_some() {
        tracing::info!("Site settings already exist, skipping");
        return Ok(());
    }

    let site_name = std::env::var("SITE_NAME").unwrap_or_else(|_| "Falcone".into());
    let settings =
        SiteSettingsRepo::upsert(pool, MAIN_SLUG, &UpsertSiteSettings::defaults(site_name))
            .await
            .context("Failed to create site settings")?;

    tracing::info!(settings_id = settings.id, "Default site settings created");
    Ok(())
}

async fn seed_press_kit(pool: &DbPool) -> anyhow::Result<()> {
    if PressKitRepo::find_by_slug(pool, MAIN_SLUG).await?.is_some() {
        tracing::info!("Press kit already exists, skipping");
        return Ok(());
    }

    let kit = PressKitRepo::upsert(
        pool,
        MAIN_SLUG,
        &UpsertPressKit {
            bio_short: PLACEHOLDER_BIO.to_string(),
            ..Default::default()
        },
    )
    .await
    .context("Failed to create press kit")?;

    tracing::info!(press_kit_id = kit.id, "Default press kit created");
    Ok(())
}
