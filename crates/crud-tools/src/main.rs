//! CRUD tools CLI - Scaffolding for React CRUD modules

use anyhow::Result;
use clap::Parser;
use scaffolder_core::ProductConfig;

/// CRUD tools product configuration
#[derive(Clone)]
pub struct CrudConfig;

impl ProductConfig for CrudConfig {
    fn name(&self) -> &'static str {
        "crud-tools"
    }

    fn display_name(&self) -> &'static str {
        "CRUD Module Generator"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for scaffolding React CRUD modules with a Redux slice"
    }
}

#[derive(Parser, Debug)]
#[command(name = "crud-tools")]
#[command(about = "CLI for scaffolding React CRUD modules with a Redux slice")]
#[command(version)]
pub struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = CrudConfig;

    let result = scaffolder_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_accept_no_arguments() {
        assert!(Args::try_parse_from(["crud-tools"]).is_ok());
    }

    #[test]
    fn test_args_reject_unknown_flags() {
        assert!(Args::try_parse_from(["crud-tools", "--name", "Users"]).is_err());
    }

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_config_identity() {
        assert_eq!(CrudConfig.name(), "crud-tools");
        assert_eq!(
            CrudConfig.cli_description(),
            Args::command().get_about().unwrap().to_string()
        );
    }
}
