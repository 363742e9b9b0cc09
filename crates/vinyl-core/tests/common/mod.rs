use tempfile::TempDir;
use vinyl_core::{Cabinet, CabinetBuilder};

/// Helper function to create a test cabinet
pub async fn create_test_cabinet() -> (TempDir, Cabinet) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let cabinet = CabinetBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create cabinet");
    (temp_dir, cabinet)
}
