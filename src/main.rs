mod aws;
mod gateway;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aws::session::Session;
use gateway::{enumerate_endpoints, RestApiGateway};

#[derive(Debug, Parser)]
#[command(name = "apigw-enum", version)]
#[command(about = "Enumerates publicly reachable API Gateway REST API invoke URLs")]
struct Args {
    /// One or more comma separated AWS regions in the format us-east-1.
    /// Defaults to all known regions.
    #[arg(long, value_delimiter = ',')]
    regions: Option<Vec<String>>,

    /// AWS profile to authenticate with
    #[arg(short, long)]
    profile: Option<String>,

    /// Log level filter (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let regions = match args.regions {
        Some(regions) => regions,
        None => aws::regions::list_regions(),
    };

    let session = Session::connect(args.profile).await;
    let summary =
        enumerate_endpoints(&regions, |region| RestApiGateway::new(session.client(region))).await?;

    print!("{}", summary.report());
    Ok(())
}
