use graphword::cli::Cli;
use graphword::config::Settings;
use graphword::{commands, logging};
use structopt::StructOpt;

fn main() {
    let opt = Cli::from_args();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(&settings);

    if let Err(e) = commands::run(opt, &settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
