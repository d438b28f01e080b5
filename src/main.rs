use std::io;
use std::process::ExitCode;

use dotenvy::dotenv;
use order_report::{
    connect, run_pipeline, DieselOrderReportRepository, ReportError, ReportWriter, Settings,
};

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ReportError> {
    let settings = Settings::from_env()?;
    log::debug!("Loaded settings: {:?}", settings);

    let writer = ReportWriter::new(settings.report_path.clone());
    let stdout = io::stdout();
    let mut console = stdout.lock();

    run_pipeline(
        || connect(&settings.database).map(DieselOrderReportRepository::new),
        writer,
        &mut console,
    )?;
    Ok(())
}
