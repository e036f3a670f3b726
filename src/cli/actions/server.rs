use crate::cli::actions::Action;
use crate::reauthd::new;
use anyhow::Result;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port } => {
            new(port).await?;
        }
    }

    Ok(())
}
