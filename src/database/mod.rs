use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Pool compartilhado pelo processo inteiro, criado uma vez no boot
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        // Database name comes from the URI path, with a fallback
        let db_name = client_options
            .default_database
            .clone()
            .unwrap_or_else(|| "users_service".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    /// Handle sem o ping de conexão, para testes de handler que não
    /// devem tocar o banco.
    #[cfg(test)]
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<bool, mongodb::error::Error> {
        self.db.list_collection_names().await?;
        Ok(true)
    }
}
