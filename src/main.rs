use uint160_printer::cli;

fn main() {
    env_logger::Builder::new().parse_default_env().init();

    if let Err(err) = cli::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
