//! dlverify main entrypoint.

use dlverify::run;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        dlverify::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
