//! Entry point for the `vanta` command-line interface.
#![forbid(unsafe_code)]

use vanta_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    env_logger::init();
    match vanta_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("vanta: {err}");
            std::process::exit(1);
        }
    }
}
