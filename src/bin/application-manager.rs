use std::error::Error;
use std::process::ExitCode;

use tracing::{debug, error, info};

use application_manager::application_manager::{
    ApplicationManagerError, ApplicationManagerRegistry,
};
use application_manager::cli::Cli;
use application_manager::logging::Logging;

fn main() -> ExitCode {
    let cli = Cli::init_cli();

    if cli.print_debug_info() {
        println!("Printing debug info");
        println!("CLI: {:#?}", cli);
        return ExitCode::SUCCESS;
    }

    // init logging singleton
    if let Err(e) = Logging::try_init() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // the manager already logged why the kill failed
        Err(e) if e.is::<ApplicationManagerError>() => {
            debug!("application manager error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("application manager error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.load_config()?;
    let registry = ApplicationManagerRegistry::try_new(&config)?;
    let context = cli.context()?;

    let manager = registry.get(cli.resource_manager())?;
    manager.kill_application(&context)?;
    info!("kill request for {:?} dispatched", context.app_ids());

    Ok(())
}
