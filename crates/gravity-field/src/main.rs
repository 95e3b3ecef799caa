//! Just `main()`. Keep as small as possible.

use color_eyre::eyre::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let result = gravity_field::run::run().await;
    if let Err(error) = &result {
        tracing::error!("{error:?}");
    }
    result
}
