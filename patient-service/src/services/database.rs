use crate::models::PatientRecord;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct PatientDb {
    client: MongoClient,
    db: Database,
}

impl PatientDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for patient-service");

        let patients = self.patients();

        // Records are append-only; createdAt mirrors insertion order.
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_lookup".to_string())
                    .build(),
            )
            .build();

        patients
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create createdAt index on patients collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on patients.createdAt");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// The single write operation. Nothing in the service reads, updates,
    /// or deletes records.
    pub async fn create_patient(&self, record: &PatientRecord) -> Result<(), AppError> {
        self.patients().insert_one(record, None).await.map_err(|e| {
            tracing::error!(
                patient_id = %record.id,
                "Failed to insert patient record: {}",
                e
            );
            AppError::from(e)
        })?;
        Ok(())
    }

    pub fn patients(&self) -> Collection<PatientRecord> {
        self.db.collection("patients")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
