//! Hangout detail state: the per-hangout action surface.
//!
//! Mutations optimistically patch the local hangout only after the
//! server acknowledges. A like flips the hangout's own flag; membership
//! of any liked list is reconciled by the next profile fetch, not here.

use std::sync::Arc;

use crate::cell::{Cell, Notifier};
use crate::diagnostics::{self, DiagnosticSender};
use crate::models::{BappyUser, Hangout, HangoutReport, HangoutState, Participant};
use crate::traits::HangoutRepository;

/// State container for one hangout's detail screen.
pub struct HangoutDetailState {
    hangout_repository: Arc<dyn HangoutRepository>,
    user: BappyUser,

    hangout: Cell<Hangout>,
    working: Cell<bool>,
    deleted: Notifier<()>,
    report_submitted: Notifier<()>,

    diagnostics: Option<DiagnosticSender>,
}

impl HangoutDetailState {
    pub fn new(
        user: BappyUser,
        hangout: Hangout,
        hangout_repository: Arc<dyn HangoutRepository>,
    ) -> Self {
        Self {
            hangout_repository,
            user,
            hangout: Cell::new(hangout),
            working: Cell::new(false),
            deleted: Notifier::new(),
            report_submitted: Notifier::new(),
            diagnostics: None,
        }
    }

    /// Attach a diagnostic sink for swallowed failures.
    pub fn with_diagnostics(mut self, sink: DiagnosticSender) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Whether the viewer can join: open, not full, not already in.
    pub fn can_join(&self) -> bool {
        let hangout = self.hangout.get();
        hangout.state == HangoutState::Available
            && hangout.has_capacity()
            && !hangout.has_participant(&self.user.id)
    }

    /// Heart button: flip the viewer's like.
    pub async fn toggle_like(&self) {
        let target = !self.hangout.get().user_has_liked;
        let id = self.hangout.get().id;

        self.working.set(true);
        let result = self.hangout_repository.like_hangout(&id, target).await;
        self.working.set(false);

        match result {
            Ok(true) => self.hangout.update(|h| h.user_has_liked = target),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "detail.like", err.to_string())
            }
        }
    }

    /// Join button.
    pub async fn join(&self) {
        if !self.can_join() {
            return;
        }
        let id = self.hangout.get().id;

        self.working.set(true);
        let result = self.hangout_repository.join_hangout(&id).await;
        self.working.set(false);

        match result {
            Ok(true) => self.hangout.update(|h| {
                h.participants.push(Participant::new(
                    self.user.id.clone(),
                    self.user.profile_image_url.clone(),
                ));
            }),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "detail.join", err.to_string())
            }
        }
    }

    /// Cancel participation.
    pub async fn cancel(&self) {
        if !self.hangout.get().has_participant(&self.user.id) {
            return;
        }
        let id = self.hangout.get().id;

        self.working.set(true);
        let result = self.hangout_repository.cancel_hangout(&id).await;
        self.working.set(false);

        match result {
            Ok(true) => self.hangout.update(|h| {
                h.participants.retain(|p| p.id != self.user.id);
            }),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "detail.cancel", err.to_string())
            }
        }
    }

    /// Delete the hangout (owner only, enforced by the backend).
    pub async fn delete(&self) {
        let id = self.hangout.get().id;

        self.working.set(true);
        let result = self.hangout_repository.delete_hangout(&id).await;
        self.working.set(false);

        match result {
            Ok(true) => self.deleted.emit(()),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "detail.delete", err.to_string())
            }
        }
    }

    /// Submit a report about this hangout.
    pub async fn report(&self, report_type: &str, detail: &str, images: Vec<Vec<u8>>) {
        let report = HangoutReport {
            hangout_id: self.hangout.get().id,
            report_type: report_type.to_string(),
            detail: detail.to_string(),
            images,
        };

        self.working.set(true);
        let result = self.hangout_repository.report_hangout(&report).await;
        self.working.set(false);

        match result {
            Ok(true) => self.report_submitted.emit(()),
            Ok(false) => {}
            Err(err) => {
                diagnostics::report(self.diagnostics.as_ref(), "detail.report", err.to_string())
            }
        }
    }

    pub fn hangout(&self) -> &Cell<Hangout> {
        &self.hangout
    }

    pub fn working(&self) -> &Cell<bool> {
        &self.working
    }

    pub fn deleted(&self) -> &Notifier<()> {
        &self.deleted
    }

    pub fn report_submitted(&self) -> &Notifier<()> {
        &self.report_submitted
    }
}
