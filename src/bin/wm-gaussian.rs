use clap::Parser;
use wondermagick_gaussian::args::Args;

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = args.into_plan().execute() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
