//! Account endpoints.

use std::collections::HashMap;

use crate::{
    client::Client,
    error::Error,
    model::account::{AccountInfo, AccountSearchEntry},
};

/// Endpoints under `/account/`.
pub struct AccountEndpoints<'a> {
    client: &'a Client,
}

impl<'a> AccountEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Searches accounts by nickname.
    ///
    /// Matches are returned in the API's own relevance order. The API rejects search
    /// strings shorter than three characters with an error envelope.
    ///
    /// # Arguments
    /// - `search` - Nickname or nickname prefix
    ///
    /// # Returns
    /// - `Ok(Vec<AccountSearchEntry>)` - Matching accounts, possibly empty
    /// - `Err(Error)` - Request failed or the API refused it
    pub async fn search(&self, search: &str) -> Result<Vec<AccountSearchEntry>, Error> {
        self.client
            .get("/account/list/", &[("search", search.to_string())])
            .await
    }

    /// Fetches the profile and statistics of an account.
    ///
    /// # Arguments
    /// - `account_id` - Account to fetch
    ///
    /// # Returns
    /// - `Ok(Some(AccountInfo))` - Account found
    /// - `Ok(None)` - The API returned no record for this account
    /// - `Err(Error)` - Request failed, the API refused it, or the record was malformed
    pub async fn info(&self, account_id: i64) -> Result<Option<AccountInfo>, Error> {
        let mut data: HashMap<String, Option<AccountInfo>> = self
            .client
            .get("/account/info/", &[("account_id", account_id.to_string())])
            .await?;

        Ok(data.remove(&account_id.to_string()).flatten())
    }
}
