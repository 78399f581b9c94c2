// colab-client/demos/list_collaborators.rs
// Lists active collaborators using a token from the environment
//
// Usage:
//   COLAB_TOKEN=... COLAB_ROLE=admin cargo run -p colab-client --example list_collaborators

use colab_client::{
    ClientConfig, MemorySessionStore, SessionContext, SessionStore, SyncController, can_remove_from,
    logger::init_logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("colab_client=info", false)?;

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to collaborators API");

    let store = MemorySessionStore::new();
    if let Ok(token) = std::env::var("COLAB_TOKEN") {
        store.set("token", &token)?;
    }
    if let Ok(role) = std::env::var("COLAB_ROLE") {
        store.set("role", &role)?;
    }

    let session = SessionContext::capture(&store);
    if session.requires_login() {
        println!("Not logged in: set COLAB_TOKEN and COLAB_ROLE");
        return Ok(());
    }

    let controller = SyncController::from_config(config)?;
    match controller.refresh(&session).await {
        Err(failure) if failure.kind.requires_login() => {
            println!("{}", failure.message);
            return Ok(());
        }
        _ => {}
    }

    let snapshot = controller.store().snapshot().await;
    if let Some(error) = &snapshot.error {
        println!("Error: {error}");
    }
    if snapshot.items.is_empty() {
        println!("No collaborators found");
    }
    for c in &snapshot.items {
        println!(
            "{:>5}  {:<24} {:<28} {:<14} {:<16} {:<16} {:<10} {}",
            c.id,
            c.name,
            c.email,
            c.display_cpf(),
            c.job_title,
            c.department,
            c.hire_date_display(),
            c.role.label()
        );
    }

    if !can_remove_from(&store) {
        println!("Note: only administrators can remove collaborators");
    }

    Ok(())
}
