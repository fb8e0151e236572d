#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vibecheck_server::start().await
}
