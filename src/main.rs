//! Demo driver: seeds the site state, walks the main flows, and writes
//! the two export documents.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use folio::commands::{auth, categories, contact, export, projects};
use folio::models::ContactMessage;
use folio::store::{GalleryQuery, SortKey};
use folio::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file_appender = tracing_appender::rolling::daily("logs", "folio.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    let out_dir: PathBuf = env::args().nth(1).unwrap_or_else(|| "dist".to_string()).into();
    fs::create_dir_all(&out_dir)?;

    // Demo credential; a deployment would take this from its operator.
    let mut state = AppState::seeded("admin");
    auth::login(&mut state, "admin")?;

    let query = GalleryQuery {
        sort: SortKey::Popular,
        ..Default::default()
    };
    for project in projects::list_gallery(&state, &query) {
        info!(
            "{}: {} likes, {} views ({})",
            project.title, project.likes, project.views, project.category
        );
    }
    for category in categories::list_categories(&state) {
        info!("{}: {} projects", category.name, category.project_count);
    }

    export::download_resume(&state, &out_dir.join("resume.html"))?;
    export::export_backup(&state, &out_dir.join("portfolio-backup.json"))?;

    contact::submit_contact(ContactMessage::new(
        "訪客".to_string(),
        "visitor@example.com".to_string(),
        "打個招呼".to_string(),
        "網站做得很好！".to_string(),
    ))
    .await?;

    info!("Done; exports in {:?}", out_dir);
    Ok(())
}
