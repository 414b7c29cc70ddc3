use clap::Parser;

use polygon_cleaner::Args;

pub fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = args.execute() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
