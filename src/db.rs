use diesel::pg::PgConnection;
use diesel::Connection;

use crate::config::DatabaseSettings;
use crate::domain::errors::ReportError;

/// Open the single database session used for the whole run.
///
/// The returned connection is owned by the caller and closed when dropped.
pub fn connect(settings: &DatabaseSettings) -> Result<PgConnection, ReportError> {
    let conn = PgConnection::establish(&settings.connection_string())?;
    log::info!("Connected to the database successfully!");
    Ok(conn)
}
