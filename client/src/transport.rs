//! HTTP transport for the pokedex and game endpoints

use std::future::Future;

use dexter_protocol::{CreatureDetail, GameRequest, MatchStart, RosterRecord, TurnUpdate};
use thiserror::Error;

use crate::{GAME_URL, POKEDEX_URL};

/// A failed exchange with the remote service.
///
/// No retries are performed: a failed call surfaces immediately and the
/// user re-triggers the action manually.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("error in request: {0}")]
    Status(String),

    /// The service answered successfully with a body that does not match
    /// the expected format
    #[error("malformed response: {0}")]
    Malformed(anyhow::Error),
}

/// The four operations the battle session needs from the remote service.
///
/// [`Transport`] is the production implementation; tests drive the session
/// with a scripted in-memory implementation instead.
pub trait GameService {
    fn fetch_catalog(
        &self,
    ) -> impl Future<Output = Result<Vec<RosterRecord>, TransportError>>;

    fn fetch_creature(
        &self,
        shortname: &str,
    ) -> impl Future<Output = Result<CreatureDetail, TransportError>>;

    fn start_match(
        &self,
        request: &GameRequest,
    ) -> impl Future<Output = Result<MatchStart, TransportError>>;

    fn submit_turn(
        &self,
        request: &GameRequest,
    ) -> impl Future<Output = Result<TurnUpdate, TransportError>>;
}

/// reqwest-backed adapter for the fixed web service endpoints
pub struct Transport {
    http: reqwest::Client,
    pokedex_url: String,
    game_url: String,
}

impl Transport {
    /// Adapter against the production endpoints
    pub fn new() -> Self {
        Self::with_endpoints(POKEDEX_URL, GAME_URL)
    }

    /// Adapter against alternate endpoints (mirrors, local fixtures)
    pub fn with_endpoints(pokedex_url: impl Into<String>, game_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            pokedex_url: pokedex_url.into(),
            game_url: game_url.into(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, TransportError> {
        let response = self.http.get(url).send().await?;
        Self::check(response)
    }

    async fn post_game(&self, request: &GameRequest) -> Result<reqwest::Response, TransportError> {
        let response = self
            .http
            .post(&self.game_url)
            .form(&request.to_form())
            .send()
            .await?;
        Self::check(response)
    }

    fn check(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(TransportError::Status(status.to_string()))
        }
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl GameService for Transport {
    async fn fetch_catalog(&self) -> Result<Vec<RosterRecord>, TransportError> {
        let url = format!("{}pokedex.php?pokedex=all", self.pokedex_url);
        let text = self.get(&url).await?.text().await?;
        dexter_protocol::parse_catalog(&text).map_err(TransportError::Malformed)
    }

    async fn fetch_creature(&self, shortname: &str) -> Result<CreatureDetail, TransportError> {
        let url = format!("{}pokedex.php?pokemon={}", self.pokedex_url, shortname);
        Ok(self.get(&url).await?.json().await?)
    }

    async fn start_match(&self, request: &GameRequest) -> Result<MatchStart, TransportError> {
        Ok(self.post_game(request).await?.json().await?)
    }

    async fn submit_turn(&self, request: &GameRequest) -> Result<TurnUpdate, TransportError> {
        Ok(self.post_game(request).await?.json().await?)
    }
}
