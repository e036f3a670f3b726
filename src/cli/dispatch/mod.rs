use crate::cli::actions::Action;
use anyhow::Result;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler_returns_server_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec!["reauthd", "--port", "9090"]);
        let action = handler(&matches)?;

        match action {
            Action::Server { port } => assert_eq!(port, 9090),
        }

        Ok(())
    }
}
