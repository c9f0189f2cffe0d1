//! optmerge: resolve options from the command line, a config file and defaults
//!
//! Exit codes: `0` success, `1` help requested, `-1` invalid arguments or
//! configuration.

mod cli;

fn main() {
    let code = match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            -1
        }
    };
    std::process::exit(code)
}
