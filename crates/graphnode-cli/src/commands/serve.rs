//! Serve command

use clap::Args;
use graphnode_api::{run_server, AppState};

use crate::AppContext;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long)]
    pub bind: Option<String>,
}

pub async fn run(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let mut settings = ctx.config.server;
    if let Some(bind) = &args.bind {
        settings.bind = bind.clone();
    }

    tracing::info!(
        "Serving {} nodes, filterable by: {}",
        ctx.store.len(),
        ctx.allow_list.names().join(", ")
    );

    run_server(AppState::new(ctx.store, ctx.allow_list, settings)).await
}
