#[tokio::main]
async fn main() -> anyhow::Result<()> {
    arcade_backend::run().await
}
