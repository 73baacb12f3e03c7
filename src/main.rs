use std::env;
use std::ffi::OsString;

fn main() {
    // No argument parsing: everything after the binary name belongs to the
    // backend and is forwarded untouched.
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match echomind_run::launch(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
