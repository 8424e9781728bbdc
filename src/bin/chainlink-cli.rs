use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "chainlink-cli")]
#[command(about = "Operator CLI for the ChainLink faucet and status services", long_about = None)]
struct Cli {
    /// Status service base URL
    #[arg(long, env = "STATUS_URL", default_value = "http://localhost:8001")]
    status_url: String,

    /// Faucet service base URL
    #[arg(long, env = "FAUCET_URL", default_value = "http://localhost:8000")]
    faucet_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full cluster status
    Status,
    /// Status of a single node
    Node { name: String },
    /// Block heights across the cluster
    Blocks,
    /// Cluster health summary
    Health,
    /// Cluster gauges in Prometheus text format
    Metrics,
    /// Request a drip to an address
    Drip { address: String },
    /// Balance of an address
    Balance { address: String },
    /// Funding account summary
    FaucetInfo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let status = cli.status_url.trim_end_matches('/');
    let faucet = cli.faucet_url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Status => client.get(format!("{}/status", status)),
        Commands::Node { name } => client.get(format!("{}/node/{}", status, name)),
        Commands::Blocks => client.get(format!("{}/blocks", status)),
        Commands::Health => client.get(format!("{}/health", status)),
        Commands::Metrics => client.get(format!("{}/metrics", status)),
        Commands::Drip { address } => client
            .post(format!("{}/drip", faucet))
            .json(&json!({ "address": address })),
        Commands::Balance { address } => client.get(format!("{}/balance/{}", faucet, address)),
        Commands::FaucetInfo => client.get(format!("{}/faucet-info", faucet)),
    };

    let res = request.send().await?;
    if matches!(cli.command, Commands::Metrics) {
        print_text(res).await
    } else {
        print_response(res).await
    }
}

async fn print_text(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }
    println!("{}", text);
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
