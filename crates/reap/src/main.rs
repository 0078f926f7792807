use reap_core::init_logging;

mod app;
mod commands;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = app::build_cli();
    let matches = app.get_matches();

    init_logging();

    commands::run_sweep(&matches)?;

    Ok(())
}
