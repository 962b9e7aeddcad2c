use std::process::ExitCode;

fn main() -> ExitCode {
    nitpick_try::logging::init();
    // Child exit codes pass straight through; only our own failures are printed.
    match nitpick_try::cli::run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(nitpick_try::error::exit_code_for(&err))
        }
    }
}
