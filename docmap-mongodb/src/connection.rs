//! Connection establishment.

use mongodb::{Client, Database, options::ClientOptions};

use docmap_core::error::{DocMapError, DocMapResult};

/// An open client handle plus the database resolved from the URL path.
///
/// The handle is cheap to clone and safe to share exactly to the extent the
/// driver's handles are; no pooling or retry policy is layered on top of
/// the driver's defaults.
#[derive(Clone, Debug)]
pub struct MongoConnection {
    pub client: Client,
    pub database: Database,
}

impl MongoConnection {
    /// Connects to the endpoint in `url` and resolves the database named by
    /// the URL's path segment.
    ///
    /// Fails with [`DocMapError::Config`] when the URL names no database;
    /// any driver failure propagates unmodified.
    pub async fn connect(url: &str) -> DocMapResult<Self> {
        let name = database_name(url)
            .ok_or_else(|| DocMapError::Config("connection URL names no database".to_string()))?
            .to_string();
        let options = ClientOptions::parse(url)
            .await
            .map_err(DocMapError::driver)?;
        let client = Client::with_options(options).map_err(DocMapError::driver)?;
        let database = client.database(&name);
        tracing::debug!(database = name.as_str(), "opened mongodb client");
        Ok(MongoConnection { client, database })
    }
}

/// Extracts the database name from a connection URL's path segment.
///
/// Returns `None` when the URL carries no path, or an empty one.
pub fn database_name(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = rest.split_once('/')?.1;
    let name = path.split('?').next().unwrap_or("");
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_database_name_from_path() {
        assert_eq!(database_name("mongodb://localhost/app"), Some("app"));
        assert_eq!(database_name("mongodb://localhost:27017/app"), Some("app"));
        assert_eq!(
            database_name("mongodb://u:p@h1:27017,h2:27017/app?replicaSet=rs0"),
            Some("app")
        );
        assert_eq!(database_name("mongodb+srv://cluster.example.net/app"), Some("app"));
    }

    #[test]
    fn missing_or_empty_path_yields_none() {
        assert_eq!(database_name("mongodb://localhost"), None);
        assert_eq!(database_name("mongodb://localhost/"), None);
        assert_eq!(database_name("mongodb://localhost/?w=1"), None);
    }

    #[tokio::test]
    async fn connect_requires_database_path() {
        let err = MongoConnection::connect("mongodb://localhost:27017")
            .await
            .unwrap_err();
        assert!(matches!(err, DocMapError::Config(_)));
    }

    #[tokio::test]
    async fn connect_propagates_driver_parse_failures() {
        let err = MongoConnection::connect("not-a-url/app").await.unwrap_err();
        assert!(matches!(err, DocMapError::Driver(_)));
    }
}
