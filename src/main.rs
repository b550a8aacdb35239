mod cli;
mod logging;

use clap::Parser;
use log::info;

use cli::{Cli, CliError};
use protstat::sequence::translate_coding_dna;
use protstat::{BisectionSolver, ProteinReport};

fn run(cli: &Cli) -> cli::Result<()> {
    cli.validate()?;
    let solver = BisectionSolver::default();

    for (i, input) in cli.sequences.iter().enumerate() {
        let protein = if cli.dna {
            translate_coding_dna(input)?
        } else {
            input.trim().to_string()
        };

        info!("Analyzing input {} ({} residues)", i + 1, protein.len());
        let report = ProteinReport::analyze(&protein, cli.ph, &solver);

        if i > 0 {
            println!();
        }
        println!("{report}");
    }

    Ok(())
}

fn main() -> Result<(), CliError> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    logging::set_log_level();
    logging::init_logging(!cli.no_log_file).map_err(|e| CliError::Logging(e.to_string()))?;
    logging::log_system_info();

    let result = run(&cli);
    if let Err(e) = &result {
        logging::log_critical_error(&e.to_string(), Some("analysis"));
    }

    logging::log_shutdown();
    result
}
