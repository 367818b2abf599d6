use wordpane::app::App;
use wordpane::utilities::{initialize_logging, initialize_panic_handler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_logging()?;
    initialize_panic_handler();

    let mut app = App::new();
    app.run().await
}
