pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for the users database.
    ///
    /// The scheme selects the driver (`postgres://`, `sqlite:`).
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub max_connections: u32,
    /// Restricts interface listing to wireless devices.
    pub wireless_only: bool,
}

impl Config {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            wireless_only: false,
        }
    }
}

