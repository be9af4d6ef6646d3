use kanban_store::models::{CardId, ColumnId};
use kanban_store::{BoardStore, StoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kanban_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StoreConfig::from_env()?;
    tracing::info!(?config, "starting board store");

    let mut store = BoardStore::from_config(config);
    store.subscribe(|state| {
        tracing::info!(
            boards = state.board_count(),
            active = ?state.active_board_id(),
            "state changed"
        );
    });

    for workspace in store.state().workspace_views() {
        tracing::info!(
            workspace = %workspace.name,
            boards = workspace.boards.len(),
            "workspace loaded"
        );
    }

    // Replays a drag from the demo board when it is present.
    let todo = ColumnId::from("column-1");
    let in_progress = ColumnId::from("column-2");
    let card = CardId::from("card-6");
    if let Some(index) = store
        .state()
        .column(&todo)
        .and_then(|col| col.position_of(&card))
    {
        store.move_card(&card, &todo, &in_progress, index, 0)?;
    }

    match store.get_current_board() {
        Some(board) => println!("{}", serde_json::to_string_pretty(&board)?),
        None => tracing::warn!("no active board"),
    }

    Ok(())
}
