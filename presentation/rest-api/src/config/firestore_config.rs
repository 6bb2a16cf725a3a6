use std::env;
use std::sync::Arc;

use firestore::client::FirestoreClient;
use firestore::credentials::ServiceAccount;
use firestore::token::TokenProvider;

/// Build the Firestore client from the service account key file
///
/// Environment variables:
/// - GOOGLE_APPLICATION_CREDENTIALS: Path to the service account JSON key (required)
/// - FIREBASE_PROJECT_ID: Overrides the project id from the key file (optional)
///
/// # Errors
/// Returns an error when the key file is missing, unreadable, or malformed,
/// with a message that names the offending path or field.
pub fn init_firestore() -> anyhow::Result<FirestoreClient> {
    let account = ServiceAccount::from_env()?;
    let project_id = env::var("FIREBASE_PROJECT_ID").unwrap_or_else(|_| account.project_id.clone());

    let tokens = Arc::new(TokenProvider::new(account));
    Ok(FirestoreClient::new(&project_id, tokens))
}
