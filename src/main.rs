use clap::Parser;
use docchat_client::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = docchat_client::run(cli).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
