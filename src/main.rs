use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nexus_tracker::config;
use nexus_tracker::core::report;
use nexus_tracker::errors::Result;
use nexus_tracker::models::predefined_users;
use nexus_tracker::session::Session;
use nexus_tracker::settings::ReminderSettings;
use nexus_tracker::store;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the application configuration
    let app_config = config::load_config()
        .inspect_err(|e| error!("Critical error loading application configuration: {e}"))?;

    // 4. Open the store, seeding demo data on first run
    let pool = store::init_store(&app_config)
        .await
        .inspect(|_| info!("Local store initialized."))
        .inspect_err(|e| error!("Failed to initialize local store: {e}"))?;

    // 5. Restore the session, signing in the first user when nobody is
    let session = Session::new(Arc::clone(&pool));
    let user = session.current_user().unwrap_or_else(|| {
        let [first, _] = predefined_users();
        session.set_current_user(Some(&first));
        first
    });

    // 6. Print the dashboard snapshot for the active user
    let summary = report::dashboard_summary(&pool, user.id).await;

    println!("Nexus status for {}", user.username);
    println!("  Expenses total: {:.2}", summary.total_expenses);
    for entry in &summary.expenses_by_category {
        println!("    {}: {:.2}", entry.category, entry.total);
    }
    println!("  Investments total: {:.2}", summary.total_investments);
    for entry in &summary.investments_by_category {
        println!("    {}: {:.2}", entry.category, entry.total);
    }
    println!("  Goals:");
    for goal in &summary.goals_preview {
        println!("    {} (target {})", goal.title, goal.target_date.format("%Y-%m-%d"));
    }
    println!("  Reminders:");
    for reminder in &summary.reminders_preview {
        println!("    {} (due {})", reminder.note, reminder.due_date.format("%Y-%m-%d"));
    }

    let settings = ReminderSettings::load(&pool);
    match settings.mailto_link() {
        Some(link) => println!("  Daily reminder at {}: {link}", settings.reminder_time),
        None => println!(
            "  Daily reminder at {}: no recipient emails configured",
            settings.reminder_time
        ),
    }

    Ok(())
}
