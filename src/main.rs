//! Unit Converter (unitconv)
//!
//! An MCP server for length and temperature conversions.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use unitconv::build_info;
use unitconv::mcp::UnitConvService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr; stdout carries the MCP stdio protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("unitconv=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = UnitConvService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("MCP server initialized");

    server.waiting().await?;
    tracing::info!("MCP server stopped");

    Ok(())
}
