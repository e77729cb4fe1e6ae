//! Wizard orchestrator.
//!
//! This module coordinates the wizard state machine and side effects:
//! it owns the draft, dispatches UI events through the pure machine,
//! executes the resulting actions against the ports, and reconciles
//! overlapping autocomplete responses by sequence number.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use enquiry_core::enquiry::{AreaOfPractice, EnquiryDraft, SubmissionRequest, SubmissionStatus};
use enquiry_core::ports::{
    BlockingLoaderPort, NotificationPort, PostcodeLookupPort, StageSchedulerPort,
};
use enquiry_core::validation::{self, Field, FieldError};
use enquiry_core::wizard::{WizardAction, WizardEvent, WizardStage, WizardState, WizardStateMachine};
use enquiry_core::SessionContext;

use crate::usecases::wizard::context::WizardContext;
use crate::usecases::{LoadAreasOfPractice, SubmitEnquiry};

/// Prefix used to prime the autocomplete dropdown before the visitor types.
pub const DEFAULT_POSTCODE_PREFIX: &str = "SW1";

/// Notification shown when the areas-of-practice load fails.
pub const AREAS_LOAD_FAILURE_MESSAGE: &str =
    "Something went wrong loading the areas of practice";

/// Dependencies injected into the orchestrator.
pub struct WizardOrchestratorDeps {
    pub load_areas: Arc<LoadAreasOfPractice>,
    pub submit_enquiry: Arc<SubmitEnquiry>,
    pub postcode_lookup: Arc<dyn PostcodeLookupPort>,
    pub notifications: Arc<dyn NotificationPort>,
    pub loader: Arc<dyn BlockingLoaderPort>,
    pub scheduler: Arc<dyn StageSchedulerPort>,
    pub session: SessionContext,
}

/// Orchestrator that drives wizard state and side effects.
///
/// All async results flow back in as state transitions or draft writes,
/// never as direct UI mutation. One orchestrator serves exactly one
/// wizard instance; nothing persists beyond its lifetime.
pub struct WizardOrchestrator {
    context: WizardContext,

    draft: Mutex<EnquiryDraft>,
    areas: Mutex<Vec<AreaOfPractice>>,
    touched: Mutex<HashSet<Field>>,
    suggestions: Mutex<Vec<String>>,
    submission: Mutex<SubmissionStatus>,
    agree_to_terms: AtomicBool,
    /// Latest issued autocomplete sequence number. A response is applied
    /// only while its own number is still the latest, so a stale reply
    /// can never overwrite the candidates for newer input.
    autocomplete_seq: AtomicU64,

    load_areas: Arc<LoadAreasOfPractice>,
    submit_enquiry: Arc<SubmitEnquiry>,
    postcode_lookup: Arc<dyn PostcodeLookupPort>,
    notifications: Arc<dyn NotificationPort>,
    loader: Arc<dyn BlockingLoaderPort>,
    scheduler: Arc<dyn StageSchedulerPort>,
}

impl WizardOrchestrator {
    pub fn new(deps: WizardOrchestratorDeps) -> Self {
        let mut draft = EnquiryDraft::default();
        if let Some(user) = &deps.session.user {
            draft.first_name = user.first_name.clone();
            draft.last_name = user.last_name.clone();
            draft.email = user.email.clone();
            draft.phone_number = user.phone_number.clone();
        }

        Self {
            context: WizardContext::at_start(),
            draft: Mutex::new(draft),
            areas: Mutex::new(Vec::new()),
            touched: Mutex::new(HashSet::new()),
            suggestions: Mutex::new(Vec::new()),
            submission: Mutex::new(SubmissionStatus::NotSubmitted),
            agree_to_terms: AtomicBool::new(false),
            autocomplete_seq: AtomicU64::new(0),
            load_areas: deps.load_areas,
            submit_enquiry: deps.submit_enquiry,
            postcode_lookup: deps.postcode_lookup,
            notifications: deps.notifications,
            loader: deps.loader,
            scheduler: deps.scheduler,
        }
    }

    /// Mount routine: loads the topic list behind the blocking loader,
    /// defaults the topic to the first entry, then primes autocomplete.
    pub async fn start(&self) {
        let span = info_span!("usecase.wizard_orchestrator.start");
        async {
            self.loader.set_visible(true).await;
            match self.load_areas.execute().await {
                Ok(list) => {
                    {
                        let mut draft = self.draft.lock().await;
                        if draft.topic.is_empty() {
                            if let Some(first) = list.first() {
                                draft.topic = first.id.clone();
                            }
                        }
                    }
                    *self.areas.lock().await = list;
                }
                Err(err) => {
                    // Topic selection stays blocked by validation; the
                    // wizard itself remains usable.
                    warn!(error = %err, "areas of practice load failed");
                    self.notifications.notify(AREAS_LOAD_FAILURE_MESSAGE).await;
                }
            }
            self.loader.set_visible(false).await;

            self.run_autocomplete(DEFAULT_POSTCODE_PREFIX).await;
        }
        .instrument(span)
        .await
    }

    /// Writes a directly editable field. Ignored once submitted.
    pub async fn set_field(&self, field: Field, value: &str) {
        if self.is_terminal().await {
            return;
        }
        let mut draft = self.draft.lock().await;
        draft.set_field(field, value);
    }

    /// Postcode keystroke: updates the draft (invalidating any resolved
    /// region) and refreshes the candidate list.
    pub async fn edit_postcode(&self, text: &str) {
        if self.is_terminal().await {
            return;
        }
        {
            let mut draft = self.draft.lock().await;
            draft.set_field(Field::Postcode, text);
        }
        self.run_autocomplete(text).await;
    }

    /// Candidate selection: resolves the exact postcode and, on success,
    /// writes postcode, region and area-in-region atomically. On failure
    /// the draft is left unchanged.
    pub async fn select_postcode(&self, postcode: &str) {
        if self.is_terminal().await {
            return;
        }
        match self.postcode_lookup.resolve(postcode).await {
            Ok(resolved) => {
                let mut draft = self.draft.lock().await;
                draft.apply_resolved_postcode(postcode, &resolved.region, &resolved.area_in_region);
            }
            Err(err) => {
                warn!(error = %err, postcode, "postcode resolve failed");
            }
        }
    }

    /// Marks a field as touched (first blur).
    pub async fn touch_field(&self, field: Field) {
        if self.is_terminal().await {
            return;
        }
        self.touched.lock().await.insert(field);
    }

    pub fn set_agree_to_terms(&self, agreed: bool) {
        self.agree_to_terms.store(agreed, Ordering::SeqCst);
    }

    pub async fn set_show_phone_number(&self, show: bool) {
        if self.is_terminal().await {
            return;
        }
        self.draft.lock().await.show_phone_number = show;
    }

    /// Validation messages for touched fields only.
    pub async fn visible_errors(&self) -> Vec<(Field, FieldError)> {
        let draft = self.draft.lock().await;
        let areas = self.areas.lock().await;
        let touched = self.touched.lock().await;
        validation::validate_all(&draft, &areas)
            .into_iter()
            .filter(|(field, _)| touched.contains(field))
            .collect()
    }

    /// Aggregate predicate over every field, regardless of touched state.
    pub async fn form_is_valid(&self) -> bool {
        let draft = self.draft.lock().await;
        let areas = self.areas.lock().await;
        validation::form_is_valid(&draft, &areas)
    }

    pub async fn next(&self) -> WizardState {
        self.dispatch(WizardEvent::Next).await
    }

    pub async fn previous(&self) -> WizardState {
        self.dispatch(WizardEvent::Previous).await
    }

    /// Submits the enquiry when the gate holds; ignored otherwise.
    ///
    /// The gate: every field valid, terms agreed, no submission pending,
    /// and the wizard sitting on the Consent stage.
    pub async fn submit(&self) -> WizardState {
        let gate_open = {
            let draft = self.draft.lock().await;
            let areas = self.areas.lock().await;
            let status = self.submission.lock().await;
            validation::submit_gate(
                &draft,
                &areas,
                self.agree_to_terms.load(Ordering::SeqCst),
                &status,
            )
        };
        let at_consent = matches!(
            self.context.get_state().await,
            WizardState::Stage(WizardStage::Consent)
        );
        if !gate_open || !at_consent {
            debug!(gate_open, at_consent, "submit ignored");
            return self.context.get_state().await;
        }

        *self.submission.lock().await = SubmissionStatus::Pending;
        self.dispatch(WizardEvent::Submit).await
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    pub async fn draft(&self) -> EnquiryDraft {
        self.draft.lock().await.clone()
    }

    pub async fn areas(&self) -> Vec<AreaOfPractice> {
        self.areas.lock().await.clone()
    }

    pub async fn suggestions(&self) -> Vec<String> {
        self.suggestions.lock().await.clone()
    }

    pub async fn submission_status(&self) -> SubmissionStatus {
        self.submission.lock().await.clone()
    }

    async fn is_terminal(&self) -> bool {
        matches!(self.context.get_state().await, WizardState::Submitted)
    }

    /// Issues a sequence-numbered autocomplete call and applies the
    /// result only while it is still the latest issued request.
    async fn run_autocomplete(&self, prefix: &str) {
        let seq = self.autocomplete_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.postcode_lookup.autocomplete(prefix).await;
        if self.autocomplete_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, prefix, "discarding stale autocomplete response");
            return;
        }
        match result {
            Ok(candidates) => {
                *self.suggestions.lock().await = candidates;
            }
            Err(err) => {
                warn!(error = %err, prefix, "postcode autocomplete failed");
            }
        }
    }

    async fn dispatch(&self, event: WizardEvent) -> WizardState {
        // Serialize concurrent dispatch calls so one transition plus its
        // action execution runs atomically.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.wizard_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = format!("{:?}", event);
                let (next, actions) = WizardStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = %event_name, "wizard state transition");
                self.context.set_state(next.clone()).await;
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) -> Vec<WizardEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::ScheduleStageSettle { to } => {
                    self.scheduler.stage_settle_delay().await;
                    debug!(?to, "stage transition settled");
                    follow_up_events.push(WizardEvent::StageSettled);
                }
                WizardAction::SubmitEnquiry => {
                    let request = {
                        let draft = self.draft.lock().await;
                        SubmissionRequest::from_draft(&draft)
                    };
                    self.loader.set_visible(true).await;
                    let result = self.submit_enquiry.execute(&request).await;
                    self.loader.set_visible(false).await;
                    match result {
                        Ok(_ack) => {
                            *self.submission.lock().await = SubmissionStatus::Succeeded;
                            follow_up_events.push(WizardEvent::SubmissionSucceeded);
                        }
                        Err(err) => {
                            let message = err.user_message();
                            *self.submission.lock().await = SubmissionStatus::Failed {
                                reason: message.clone(),
                            };
                            self.notifications.notify(&message).await;
                            follow_up_events.push(WizardEvent::SubmissionFailed { message });
                        }
                    }
                }
            }
        }

        follow_up_events
    }
}
