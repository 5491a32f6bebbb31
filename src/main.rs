use std::process::ExitCode;

use declutter::output as out;
use declutter::OrganizeError;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = declutter::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            let code = e.downcast_ref::<OrganizeError>().map_or(1, OrganizeError::code);
            ExitCode::from(code)
        }
    }
}
