//! Make-hangout flow state.
//!
//! The flow collects a hangout's fields across sub-screens; each
//! sub-screen with its own validation logic gets its own state
//! ([`OpenchatState`], [`ParticipantsLimitState`]), and
//! [`HangoutMakeState`] aggregates them behind the creation effect.

mod limit;
mod openchat;

pub use limit::{ParticipantsLimitState, MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use openchat::{OpenchatState, OPENCHAT_GUIDE_URL};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::{self, DiagnosticSender};
use crate::models::{BappyUser, Coordinates, Hangout, HangoutState, Participant};
use crate::traits::HangoutRepository;

/// A place picked on the map sub-screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedPlace {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
}

/// State container for the make-hangout flow.
pub struct HangoutMakeState {
    hangout_repository: Arc<dyn HangoutRepository>,
    user: BappyUser,

    title: Cell<String>,
    plan: Cell<String>,
    language: Cell<String>,
    meet_time: Cell<Option<DateTime<Utc>>>,
    place: Cell<Option<SelectedPlace>>,
    openchat: OpenchatState,
    limit: ParticipantsLimitState,
    creating: Cell<bool>,
    created: Notifier<Hangout>,

    diagnostics: Option<DiagnosticSender>,
}

impl HangoutMakeState {
    pub fn new(user: BappyUser, hangout_repository: Arc<dyn HangoutRepository>) -> Self {
        Self {
            hangout_repository,
            user,
            title: Cell::new(String::new()),
            plan: Cell::new(String::new()),
            language: Cell::new(String::new()),
            meet_time: Cell::new(None),
            place: Cell::new(None),
            openchat: OpenchatState::new(),
            limit: ParticipantsLimitState::new(),
            creating: Cell::new(false),
            created: Notifier::new(),
            diagnostics: None,
        }
    }

    /// Attach a diagnostic sink for swallowed failures.
    pub fn with_diagnostics(mut self, sink: DiagnosticSender) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    // --- field inputs ------------------------------------------------------

    pub fn set_title(&self, title: impl Into<String>) {
        self.title.set(title.into());
    }

    pub fn set_plan(&self, plan: impl Into<String>) {
        self.plan.set(plan.into());
    }

    pub fn set_language(&self, language: impl Into<String>) {
        self.language.set(language.into());
    }

    pub fn set_meet_time(&self, meet_time: DateTime<Utc>) {
        self.meet_time.set(Some(meet_time));
    }

    pub fn set_place(&self, place: SelectedPlace) {
        self.place.set(Some(place));
    }

    // --- derived -----------------------------------------------------------

    /// Whether every sub-screen has a valid value.
    pub fn is_valid(&self) -> bool {
        self.title.get().trim().chars().count() >= 3
            && !self.plan.get().trim().is_empty()
            && !self.language.get().trim().is_empty()
            && self.meet_time.get().is_some()
            && self.place.get().is_some()
            && self.openchat.is_valid().get()
    }

    // --- effect ------------------------------------------------------------

    /// Submit the hangout with its post image. Ignored while a prior
    /// submission is in flight or any field is invalid.
    pub async fn create(&self, image: &[u8]) {
        if !self.is_valid() || self.creating.get() {
            return;
        }
        let (Some(place), Some(meet_time)) = (self.place.get(), self.meet_time.get()) else {
            return;
        };

        let hangout = Hangout {
            id: Uuid::new_v4().to_string(),
            state: HangoutState::Available,
            title: self.title.get().trim().to_string(),
            meet_time,
            language: self.language.get().trim().to_string(),
            place_id: place.id,
            place_name: place.name,
            plan: self.plan.get().trim().to_string(),
            limit_number: self.limit.count().get(),
            coordinates: place.coordinates,
            post_image_url: None,
            openchat_url: self.openchat.openchat_text(),
            map_image_url: None,
            participants: vec![Participant::new(
                self.user.id.clone(),
                self.user.profile_image_url.clone(),
            )],
            user_has_liked: false,
        };

        self.creating.set(true);
        let result = self.hangout_repository.create_hangout(&hangout, image).await;
        self.creating.set(false);

        match result {
            Ok(true) => self.created.emit(hangout),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "make.create", err.to_string())
            }
        }
    }

    // --- outputs -----------------------------------------------------------

    pub fn openchat(&self) -> &OpenchatState {
        &self.openchat
    }

    pub fn limit(&self) -> &ParticipantsLimitState {
        &self.limit
    }

    pub fn creating(&self) -> &Cell<bool> {
        &self.creating
    }

    pub fn created(&self) -> &Notifier<Hangout> {
        &self.created
    }
}
