use std::io;

fn main() {
    parlor_cli::init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = parlor_cli::run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
