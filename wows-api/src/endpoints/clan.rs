//! Clan endpoints.

use std::collections::HashMap;

use crate::{
    client::Client,
    error::Error,
    model::clan::{ClanInfo, ClanMembership},
};

static MEMBERSHIP_FIELDS: &str = "clan_id,joined_at";
static CLAN_INFO_FIELDS: &str = "tag,name,members_count,leader_name,created_at";

/// Endpoints under `/clans/`.
pub struct ClanEndpoints<'a> {
    client: &'a Client,
}

impl<'a> ClanEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the clan membership of an account.
    ///
    /// # Returns
    /// - `Ok(Some(ClanMembership))` - Membership record; `clan_id` is `None` when the
    ///   player is not in a clan
    /// - `Ok(None)` - The API returned no record for this account
    /// - `Err(Error)` - Request failed, the API refused it, or the record was malformed
    pub async fn account_info(&self, account_id: i64) -> Result<Option<ClanMembership>, Error> {
        let mut data: HashMap<String, Option<ClanMembership>> = self
            .client
            .get(
                "/clans/accountinfo/",
                &[
                    ("account_id", account_id.to_string()),
                    ("fields", MEMBERSHIP_FIELDS.to_string()),
                ],
            )
            .await?;

        Ok(data.remove(&account_id.to_string()).flatten())
    }

    /// Fetches clan details.
    ///
    /// # Returns
    /// - `Ok(Some(ClanInfo))` - Clan found
    /// - `Ok(None)` - The API returned no record for this clan
    /// - `Err(Error)` - Request failed, the API refused it, or the record was malformed
    pub async fn info(&self, clan_id: i64) -> Result<Option<ClanInfo>, Error> {
        let mut data: HashMap<String, Option<ClanInfo>> = self
            .client
            .get(
                "/clans/info/",
                &[
                    ("clan_id", clan_id.to_string()),
                    ("fields", CLAN_INFO_FIELDS.to_string()),
                ],
            )
            .await?;

        Ok(data.remove(&clan_id.to_string()).flatten())
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use crate::{Client, Config};

    async fn setup() -> (mockito::ServerGuard, Client) {
        let server = Server::new_async().await;
        let config = Config::builder().api_url(&server.url()).build().unwrap();
        let client = Client::builder()
            .config(config)
            .application_id("test_application_id")
            .build()
            .unwrap();

        (server, client)
    }

    /// Expect the membership request to restrict the returned fields
    #[tokio::test]
    async fn account_info_requests_membership_fields() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/clans/accountinfo/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("account_id".into(), "1".into()),
                Matcher::UrlEncoded("fields".into(), "clan_id,joined_at".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":"ok","meta":{"count":1},"data":{"1":{"clan_id":2000008825,"joined_at":1600000000}}}"#,
            )
            .expect(1)
            .create();

        let membership = client.clans().account_info(1).await.unwrap().unwrap();

        assert_eq!(membership.clan_id, Some(2000008825));
        assert_eq!(membership.joined_at.unwrap().timestamp(), 1600000000);
        mock.assert();
    }

    /// Expect a membership without clan ID for clanless players
    #[tokio::test]
    async fn account_info_without_clan() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/clans/accountinfo/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"ok","meta":{"count":1},"data":{"1":{"clan_id":null,"joined_at":null}}}"#)
            .expect(1)
            .create();

        let membership = client.clans().account_info(1).await.unwrap().unwrap();

        assert!(membership.clan_id.is_none());
        mock.assert();
    }

    /// Expect clan details with optional fields decoded
    #[tokio::test]
    async fn info_decodes_clan() {
        let (mut server, client) = setup().await;
        let mock = server
            .mock("GET", "/clans/info/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("clan_id".into(), "7".into()),
                Matcher::UrlEncoded(
                    "fields".into(),
                    "tag,name,members_count,leader_name,created_at".into(),
                ),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":"ok","meta":{"count":1},"data":{"7":{"tag":"AUTMN","name":"Autumn","members_count":21,"leader_name":null,"created_at":1500000000}}}"#,
            )
            .expect(1)
            .create();

        let clan = client.clans().info(7).await.unwrap().unwrap();

        assert_eq!(clan.tag, "AUTMN");
        assert_eq!(clan.members_count, 21);
        assert!(clan.leader_name.is_none());
        mock.assert();
    }
}
