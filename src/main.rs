#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aftercopy_lib::bootstrap::run_app().await
}
