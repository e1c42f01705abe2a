//! Node lookup commands: query, get, list

use clap::Args;
use graphnode_api::response::NodeListResponse;
use graphnode_api::ApiError;
use graphnode_core::Record;
use graphnode_query::{find_by_criteria, get_all, get_by_id, NodeQuery};

use crate::output::{format_json, format_table, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct QueryArgs {
    /// Field to filter by (node_id, label, type, or a whitelisted property)
    pub by: String,

    /// Value to match; string properties ignore case
    pub value: String,
}

#[derive(Args)]
pub struct GetArgs {
    /// Node id
    pub node_id: String,
}

pub fn run_query(args: &QueryArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let query = NodeQuery::parse(&ctx.allow_list, args.by.trim(), args.value.trim())?;
    let nodes = find_by_criteria(&ctx.store, &query);

    match cli.output_format() {
        OutputFormat::Json => println!("{}", format_json(&NodeListResponse::filtered(&query, nodes))?),
        OutputFormat::Table if nodes.is_empty() => {
            if !cli.quiet {
                eprintln!("No nodes found matching the specified criteria");
            }
        }
        OutputFormat::Table => println!("{}", format_table(&nodes)),
    }
    Ok(())
}

pub fn run_get(args: &GetArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let Some(node) = get_by_id(&ctx.store, &args.node_id) else {
        return Err(ApiError::NodeNotFound(args.node_id.clone()).into());
    };

    match cli.output_format() {
        OutputFormat::Json => println!("{}", format_json(node)?),
        OutputFormat::Table => println!("{}", format_table(&[node])),
    }
    Ok(())
}

pub fn run_list(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let nodes = get_all(&ctx.store);

    match cli.output_format() {
        OutputFormat::Json => println!("{}", format_json(&NodeListResponse::all(nodes))?),
        OutputFormat::Table => {
            let rows: Vec<&Record> = nodes.iter().collect();
            println!("{}", format_table(&rows));
        }
    }
    Ok(())
}
