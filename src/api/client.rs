//! Async HTTP gateway for creature lookups
//!
//! Two endpoint families are used: by-id (`/pokemon/{idOrName}`) and by-type
//! (`/type/{typeName}`). No retries and no timeout; a hung request blocks the
//! flow that issued it.

use crate::api::mapper::{map_creature, map_type_members, RawCreature, RawTypeListing};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::types::{Creature, TypeMember};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Source of creature data
///
/// The flows only talk to this trait, so tests can swap in
/// [`MockSource`](crate::api::mock::MockSource).
#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// by-id lookup; any failure is a [`GameError::Fetch`]
    async fn fetch_by_id(&self, id_or_name: &str) -> Result<Creature>;

    /// by-type lookup; a non-success status yields an empty list
    async fn fetch_by_type(&self, type_name: &str) -> Result<Vec<TypeMember>>;

    /// Fetch a creature from a resource URL taken out of a by-type listing
    async fn fetch_by_url(&self, url: &str) -> Result<Creature>;
}

/// PokeAPI-backed [`CreatureSource`]
pub struct PokeApiClient {
    client: Client,
    config: GameConfig,
}

impl PokeApiClient {
    pub fn new(config: GameConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_creature(&self, url: &str) -> Result<Creature> {
        debug!(url, "fetching creature");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GameError::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(GameError::fetch(url, format!("HTTP {}", response.status())));
        }

        let raw: RawCreature = response
            .json()
            .await
            .map_err(|e| GameError::fetch(url, e))?;

        Ok(map_creature(&raw))
    }
}

#[async_trait]
impl CreatureSource for PokeApiClient {
    async fn fetch_by_id(&self, id_or_name: &str) -> Result<Creature> {
        self.get_creature(&self.config.creature_url(id_or_name)).await
    }

    async fn fetch_by_type(&self, type_name: &str) -> Result<Vec<TypeMember>> {
        let url = self.config.type_url(type_name);
        debug!(url = %url, "fetching type listing");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GameError::fetch(&url, e))?;

        if !response.status().is_success() {
            debug!(status = %response.status(), type_name, "type lookup missed");
            return Ok(Vec::new());
        }

        let raw: RawTypeListing = response
            .json()
            .await
            .map_err(|e| GameError::fetch(&url, e))?;

        Ok(map_type_members(&raw))
    }

    async fn fetch_by_url(&self, url: &str) -> Result<Creature> {
        self.get_creature(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer one connection per canned `(status, body)` pair, in order.
    /// Resolves to the request lines that came in.
    async fn serve(
        responses: Vec<(&'static str, &'static str)>,
    ) -> (GameConfig, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let text = String::from_utf8_lossy(&request).into_owned();
                request_lines.push(text.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            request_lines
        });

        let config = GameConfig {
            api_base_url: format!("http://{addr}"),
            ..GameConfig::default()
        };
        (config, handle)
    }

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "sprites": {"front_default": "https://img/25.png", "back_default": null},
        "stats": [
            {"base_stat": 35, "stat": {"name": "hp"}},
            {"base_stat": 55, "stat": {"name": "attack"}}
        ],
        "types": [{"slot": 1, "type": {"name": "electric"}}]
    }"#;

    #[tokio::test]
    async fn test_by_id_success_is_mapped() {
        let (config, server) = serve(vec![("200 OK", PIKACHU)]).await;
        let client = PokeApiClient::new(config);

        let creature = client.fetch_by_id("25").await.unwrap();
        assert_eq!(creature.name, "pikachu");
        assert_eq!(creature.attack, 55);
        assert_eq!(creature.back_sprite, "");
        assert_eq!(creature.type_name, "electric");

        assert_eq!(server.await.unwrap(), ["GET /pokemon/25 HTTP/1.1"]);
    }

    #[tokio::test]
    async fn test_by_id_not_found_is_fetch_error() {
        let (config, _server) = serve(vec![("404 Not Found", "Not Found")]).await;
        let client = PokeApiClient::new(config);

        match client.fetch_by_id("99999").await {
            Err(GameError::Fetch { reason, .. }) => assert!(reason.contains("404")),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_by_id_malformed_body_is_fetch_error() {
        let (config, _server) = serve(vec![("200 OK", "not json")]).await;
        let client = PokeApiClient::new(config);

        let result = client.fetch_by_id("1").await;
        assert!(matches!(result, Err(GameError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_by_type_not_found_is_empty() {
        let (config, server) = serve(vec![("404 Not Found", "Not Found")]).await;
        let client = PokeApiClient::new(config);

        let members = client.fetch_by_type("shadow").await.unwrap();
        assert!(members.is_empty());
        assert_eq!(server.await.unwrap(), ["GET /type/shadow HTTP/1.1"]);
    }

    #[tokio::test]
    async fn test_by_type_lists_members() {
        let body = r#"{"pokemon": [
            {"pokemon": {"name": "charmander", "url": "https://api/pokemon/4/"}},
            {"pokemon": {"name": "vulpix", "url": "https://api/pokemon/37/"}}
        ]}"#;
        let (config, _server) = serve(vec![("200 OK", body)]).await;
        let client = PokeApiClient::new(config);

        let members = client.fetch_by_type("fire").await.unwrap();
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["charmander", "vulpix"]);
    }

    #[tokio::test]
    async fn test_by_url_not_found_is_fetch_error() {
        let (config, _server) = serve(vec![("404 Not Found", "Not Found")]).await;
        let url = config.creature_url("4");
        let client = PokeApiClient::new(config);

        assert!(matches!(
            client.fetch_by_url(&url).await,
            Err(GameError::Fetch { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let client = PokeApiClient::new(GameConfig {
            api_base_url: "http://127.0.0.1:9".into(),
            ..GameConfig::default()
        });
        let result = client.fetch_by_id("1").await;
        assert!(matches!(result, Err(GameError::Fetch { .. })));
    }
}
