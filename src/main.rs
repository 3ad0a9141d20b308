use std::process::ExitCode;

fn main() -> ExitCode {
    ratelimit_probe::entry::run()
}
