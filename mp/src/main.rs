use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    mp::run(mp::Variant::MP)
}
