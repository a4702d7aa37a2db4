use talkmatch::app::App;
use talkmatch::matching;
use talkmatch::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let pool = matching::seed_candidates()?;

    let mut app = App::new(pool)?;
    app.init()?;

    // Keep the run outcome so the terminal is restored before reporting it.
    let outcome = app.run().await;
    app.restore()?;
    outcome
}
