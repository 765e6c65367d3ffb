//! Battle session orchestration.
//!
//! `BattleSession` mediates every exchange with the remote authority: a
//! user action is validated against the tracked match, submitted through
//! the [`GameService`], reconciled into state, and projected to the
//! [`Presenter`]. No step skips the session; it is the single source of
//! truth for what is currently true about the match.

use dexter_battle::{Outcome, SessionError, TrackedMatch};
use dexter_protocol::GameRequest;
use thiserror::Error;

use crate::card::{Side, render_card};
use crate::catalog::Catalog;
use crate::presenter::Presenter;
use crate::transport::{GameService, Transport, TransportError};

/// Top-level error channel for session operations
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// A detail request against a roster entry that has not been
    /// discovered yet
    #[error("{0} has not been discovered yet")]
    Undiscovered(String),
}

/// Owns the catalog and the tracked match, and sequences each user action
/// as one awaited exchange with the game service.
///
/// Generic over [`GameService`] so tests can substitute a scripted
/// in-memory service for the HTTP transport.
pub struct BattleSession<S = Transport> {
    service: S,
    catalog: Catalog,
    state: TrackedMatch,
}

impl BattleSession<Transport> {
    /// Session against the production endpoints
    pub fn new() -> Self {
        Self::with_service(Transport::new())
    }
}

impl Default for BattleSession<Transport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameService> BattleSession<S> {
    /// Session over an arbitrary service implementation
    pub fn with_service(service: S) -> Self {
        Self {
            service,
            catalog: Catalog::default(),
            state: TrackedMatch::new(),
        }
    }

    /// The roster, empty until `load_catalog` succeeds
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The tracked match state
    pub fn state(&self) -> &TrackedMatch {
        &self.state
    }

    /// Fetch and populate the roster.
    ///
    /// A reload never forgets what has been discovered: entries revealed
    /// by earlier victories stay known.
    pub async fn load_catalog(
        &mut self,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        let records = self.service.fetch_catalog().await?;
        let mut catalog = Catalog::from_records(records);
        for entry in self.catalog.entries() {
            if entry.known() {
                catalog.mark_known(&entry.shortname);
            }
        }
        self.catalog = catalog;
        presenter.on_catalog(self.catalog.entries());
        Ok(())
    }

    /// Fetch a known creature's detail and display its card as the local
    /// pick.
    pub async fn view_card(
        &mut self,
        shortname: &str,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        self.state.ensure_can_select()?;
        if !self.catalog.is_known(shortname) {
            return Err(ClientError::Undiscovered(shortname.to_string()));
        }

        let detail = self.service.fetch_creature(shortname).await?;
        self.state.select_creature(&detail)?;
        presenter.on_card(&render_card(&detail, Side::Player));
        Ok(())
    }

    /// Start a match with the currently displayed creature.
    ///
    /// On success the session holds the issued token pair and the
    /// opponent's full detail, and turns may be submitted.
    pub async fn start_match(
        &mut self,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        let request = self.state.begin_start()?;
        presenter.on_action_pending(true);

        match self.service.start_match(&request).await {
            Ok(start) => {
                presenter.on_action_pending(false);
                let opponent_card = render_card(&start.p2, Side::Opponent);
                tracing::debug!(opponent = %start.p2.shortname, "match started");
                self.state.complete_start(start);
                presenter.on_match_started(&opponent_card);
                Ok(())
            }
            Err(e) => {
                self.state.fail_action();
                presenter.on_action_pending(false);
                tracing::error!(error = %e, "match start failed");
                Err(e.into())
            }
        }
    }

    /// Play the move at `index` in the local move set
    pub async fn play_move(
        &mut self,
        index: usize,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        let request = self.state.begin_move(index)?;
        self.submit(request, presenter).await
    }

    /// Flee the match. The outcome is whatever the authority reports.
    pub async fn flee(&mut self, presenter: &mut impl Presenter) -> Result<(), ClientError> {
        let request = self.state.begin_flee()?;
        self.submit(request, presenter).await
    }

    /// End a match and return to the catalog view
    pub fn return_to_catalog(
        &mut self,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        self.state.reset()?;
        presenter.on_catalog_restored();
        Ok(())
    }

    async fn submit(
        &mut self,
        request: GameRequest,
        presenter: &mut impl Presenter,
    ) -> Result<(), ClientError> {
        presenter.on_action_pending(true);

        match self.service.submit_turn(&request).await {
            Ok(update) => {
                presenter.on_action_pending(false);
                let report = self.state.reconcile(&update)?;
                presenter.on_turn(&report);

                if let Some(outcome) = report.outcome {
                    if outcome == Outcome::Won
                        && let Some(shortname) = report.revealed.as_deref()
                        && self.catalog.mark_known(shortname)
                        && let Some(entry) = self.catalog.get(shortname)
                    {
                        presenter.on_entry_revealed(entry);
                    }
                    tracing::info!(?outcome, "match concluded");
                    presenter.on_match_ended(outcome);
                }
                Ok(())
            }
            Err(e) => {
                self.state.fail_action();
                presenter.on_action_pending(false);
                tracing::error!(error = %e, "turn submission failed");
                Err(e.into())
            }
        }
    }
}
