use std::io;

fn main() {
    if let Err(e) = headsup_cli::logging::init_logging() {
        eprintln!("logging disabled: {}", e);
    }
    let code = headsup_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
