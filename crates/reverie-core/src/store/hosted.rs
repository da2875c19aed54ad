use crate::auth::Identity;
use crate::store::EntryStore;
use crate::store::error::StoreError;
use async_trait::async_trait;
use reverie_http::{Method, ServiceClient};
use reverie_model::journal::JournalEntry;
use reverie_model::journal::partial::NewJournalEntry;
use tracing::instrument;

const JOURNAL_ENTRIES: &str = "rest/v1/journal_entries";

/// Entry store on the PostgREST api of the hosted service.
///
/// Requests carry the caller's access token, so the row-level policies of the service apply.
#[derive(Debug, Clone)]
pub struct HostedEntryStore {
    client: ServiceClient,
}

impl HostedEntryStore {
    #[must_use]
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntryStore for HostedEntryStore {
    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    async fn insert(&self, identity: &Identity, entry: NewJournalEntry) -> Result<JournalEntry, StoreError> {
        let request = self
            .client
            .request(Method::POST, JOURNAL_ENTRIES, Some(&identity.access_token))?
            .header("Prefer", "return=representation")
            .json(&[entry]);
        let created: Vec<JournalEntry> = self.client.send_json(request).await?;
        created.into_iter().next().ok_or(StoreError::EmptyResponse)
    }

    #[instrument(skip_all, fields(user_id = %identity.user_id()))]
    async fn list(&self, identity: &Identity) -> Result<Vec<JournalEntry>, StoreError> {
        let user_filter = format!("eq.{}", identity.user_id());
        let request = self
            .client
            .request(Method::GET, JOURNAL_ENTRIES, Some(&identity.access_token))?
            .query(&[
                ("select", "*"),
                ("user_id", user_filter.as_str()),
                ("order", "created_at.desc"),
            ]);
        Ok(self.client.send_json(request).await?)
    }

    fn backend(&self) -> &'static str {
        "hosted"
    }
}
