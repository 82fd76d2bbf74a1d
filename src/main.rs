#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    letterdesk_server::run().await
}
