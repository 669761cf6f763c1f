mod tools;

use clap::Parser;
use rmcp::ServiceExt;
use tools::SizzleMcp;

#[derive(Parser)]
#[command(name = "sizzle-mcp", about = "MCP server for the cinematography pipeline")]
struct Args {
    /// Project directory (defaults to current dir)
    #[arg(long, default_value = ".")]
    project_dir: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    std::env::set_current_dir(&args.project_dir)?;

    let service = SizzleMcp::new().serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;
    Ok(())
}
