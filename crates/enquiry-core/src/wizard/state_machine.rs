//! Wizard state machine.
//!
//! Defines a pure state transition function for the multi-stage enquiry
//! wizard. The transient blank state between stages is modelled as
//! [`WizardState::Transitioning`]; the delay that resolves it is a
//! scheduling policy owned by the orchestrator, not by this machine.

/// One user-facing screen of the wizard, display numbers 1-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardStage {
    Personal,
    Contact,
    Case,
    Consent,
}

impl WizardStage {
    /// Display number shown in the stage indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStage::Personal => 1,
            WizardStage::Contact => 2,
            WizardStage::Case => 3,
            WizardStage::Consent => 4,
        }
    }

    /// The following stage, `None` at `Consent`.
    pub fn next(self) -> Option<WizardStage> {
        match self {
            WizardStage::Personal => Some(WizardStage::Contact),
            WizardStage::Contact => Some(WizardStage::Case),
            WizardStage::Case => Some(WizardStage::Consent),
            WizardStage::Consent => None,
        }
    }

    /// The preceding stage, `None` at `Personal`.
    pub fn previous(self) -> Option<WizardStage> {
        match self {
            WizardStage::Personal => None,
            WizardStage::Contact => Some(WizardStage::Personal),
            WizardStage::Case => Some(WizardStage::Contact),
            WizardStage::Consent => Some(WizardStage::Case),
        }
    }
}

/// Wizard flow state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardState {
    /// A user-facing stage.
    Stage(WizardStage),
    /// Blank placeholder hosting the exit/enter animation. Not
    /// independently addressable; resolves to `to` on `StageSettled`.
    Transitioning { to: WizardStage },
    /// Submission in flight. Next/Previous are unreachable here.
    Submitting,
    /// Terminal success view. Every further event is a no-op.
    Submitted,
}

/// Events that drive the wizard flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardEvent {
    /// Advance to the next stage.
    Next,
    /// Return to the prior stage.
    Previous,
    /// The stage-transition delay elapsed.
    StageSettled,
    /// Submit the completed enquiry. Only dispatched once the submit
    /// gate holds; the machine additionally requires the Consent stage.
    Submit,
    /// The backend acknowledged the submission.
    SubmissionSucceeded,
    /// The submission failed; the wizard returns to Consent.
    SubmissionFailed { message: String },
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WizardAction {
    /// Apply the stage-transition delay, then feed back `StageSettled`.
    ScheduleStageSettle { to: WizardStage },
    /// Serialize the draft and post it to the backend.
    SubmitEnquiry,
}

/// Pure wizard state machine: no side effects.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(state: WizardState, event: WizardEvent) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Stage(stage), WizardEvent::Next) => match stage.next() {
                Some(to) => (
                    WizardState::Transitioning { to },
                    vec![WizardAction::ScheduleStageSettle { to }],
                ),
                None => (WizardState::Stage(stage), Vec::new()),
            },
            (WizardState::Stage(stage), WizardEvent::Previous) => match stage.previous() {
                Some(to) => (
                    WizardState::Transitioning { to },
                    vec![WizardAction::ScheduleStageSettle { to }],
                ),
                None => (WizardState::Stage(stage), Vec::new()),
            },
            (WizardState::Transitioning { to }, WizardEvent::StageSettled) => {
                (WizardState::Stage(to), Vec::new())
            }
            (WizardState::Stage(WizardStage::Consent), WizardEvent::Submit) => {
                (WizardState::Submitting, vec![WizardAction::SubmitEnquiry])
            }
            (WizardState::Submitting, WizardEvent::SubmissionSucceeded) => {
                (WizardState::Submitted, Vec::new())
            }
            (WizardState::Submitting, WizardEvent::SubmissionFailed { .. }) => {
                (WizardState::Stage(WizardStage::Consent), Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{WizardAction, WizardEvent, WizardStage, WizardState, WizardStateMachine};

    #[test]
    fn next_enters_transitioning_and_schedules_settle() {
        let state = WizardState::Stage(WizardStage::Personal);
        let (next, actions) = WizardStateMachine::transition(state, WizardEvent::Next);
        assert_eq!(
            next,
            WizardState::Transitioning {
                to: WizardStage::Contact
            }
        );
        assert_eq!(
            actions,
            vec![WizardAction::ScheduleStageSettle {
                to: WizardStage::Contact
            }]
        );
    }

    #[test]
    fn stage_settled_resolves_to_target_stage() {
        let state = WizardState::Transitioning {
            to: WizardStage::Case,
        };
        let (next, actions) = WizardStateMachine::transition(state, WizardEvent::StageSettled);
        assert_eq!(next, WizardState::Stage(WizardStage::Case));
        assert!(actions.is_empty());
    }

    #[test]
    fn transitions_are_strictly_sequential() {
        for stage in [
            WizardStage::Personal,
            WizardStage::Contact,
            WizardStage::Case,
        ] {
            let (next, _) =
                WizardStateMachine::transition(WizardState::Stage(stage), WizardEvent::Next);
            assert_eq!(
                next,
                WizardState::Transitioning {
                    to: stage.next().unwrap()
                }
            );
        }
        for stage in [WizardStage::Contact, WizardStage::Case, WizardStage::Consent] {
            let (next, _) =
                WizardStateMachine::transition(WizardState::Stage(stage), WizardEvent::Previous);
            assert_eq!(
                next,
                WizardState::Transitioning {
                    to: stage.previous().unwrap()
                }
            );
        }
    }

    #[test]
    fn next_is_a_noop_at_consent() {
        let state = WizardState::Stage(WizardStage::Consent);
        let (next, actions) = WizardStateMachine::transition(state, WizardEvent::Next);
        assert_eq!(next, WizardState::Stage(WizardStage::Consent));
        assert!(actions.is_empty());
    }

    #[test]
    fn previous_is_a_noop_at_personal() {
        let state = WizardState::Stage(WizardStage::Personal);
        let (next, actions) = WizardStateMachine::transition(state, WizardEvent::Previous);
        assert_eq!(next, WizardState::Stage(WizardStage::Personal));
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_only_fires_from_consent() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::Stage(WizardStage::Consent),
            WizardEvent::Submit,
        );
        assert_eq!(next, WizardState::Submitting);
        assert_eq!(actions, vec![WizardAction::SubmitEnquiry]);

        let (next, actions) = WizardStateMachine::transition(
            WizardState::Stage(WizardStage::Case),
            WizardEvent::Submit,
        );
        assert_eq!(next, WizardState::Stage(WizardStage::Case));
        assert!(actions.is_empty());
    }

    #[test]
    fn navigation_is_unreachable_while_submitting() {
        for event in [WizardEvent::Next, WizardEvent::Previous] {
            let (next, actions) = WizardStateMachine::transition(WizardState::Submitting, event);
            assert_eq!(next, WizardState::Submitting);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn submission_failure_returns_to_consent() {
        let (next, actions) = WizardStateMachine::transition(
            WizardState::Submitting,
            WizardEvent::SubmissionFailed {
                message: "Email already used".into(),
            },
        );
        assert_eq!(next, WizardState::Stage(WizardStage::Consent));
        assert!(actions.is_empty());
    }

    #[test]
    fn submitted_is_terminal() {
        for event in [
            WizardEvent::Next,
            WizardEvent::Previous,
            WizardEvent::Submit,
            WizardEvent::StageSettled,
        ] {
            let (next, actions) = WizardStateMachine::transition(WizardState::Submitted, event);
            assert_eq!(next, WizardState::Submitted);
            assert!(actions.is_empty());
        }
    }
}
