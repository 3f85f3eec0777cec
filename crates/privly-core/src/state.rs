//! Session state machine
//!
//! The page moves through an explicit enumerated state driven by a single
//! validated transition function, so an illegal sequence (reaching
//! `PostCompleted` without leaving `PendingLogin`, say) is an error value
//! rather than a silent callback mixup.

use serde::{Deserialize, Serialize};

/// Page session state; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Initial state, session check in flight
    PendingLogin,
    /// Session check rejected or errored; terminal until navigation
    LoginFailure,
    /// Authenticated, post list fetch in flight
    PendingPost,
    /// Create-post flow in progress
    PostSubmit,
    /// Post list fetch failed; terminal for the listing operation
    CreateError,
    /// Post list rendered
    PostCompleted,
}

impl SessionState {
    /// Check whether this state admits no further events
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        allowed_events(self).is_empty()
    }
}

/// Events produced by asynchronous collaborator responses and user actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session check succeeded
    SessionConfirmed,
    /// Session check failed or errored (deliberately indistinguishable)
    SessionRejected,
    /// Post list arrived
    PostsFetched,
    /// Post list request failed
    FetchFailed,
    /// User started the create-post flow
    SubmitRequested,
}

/// State machine errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The (state, event) pair is not an allowed transition
    #[error("illegal transition: {state:?} on {event:?}")]
    IllegalTransition {
        /// State the machine was in
        state: SessionState,
        /// Event that was applied
        event: SessionEvent,
    },
}

/// Apply an event to a state, yielding the next state
///
/// # Errors
/// Returns [`StateError::IllegalTransition`] for any (state, event) pair
/// not listed in [`allowed_events`].
pub fn transition(state: SessionState, event: SessionEvent) -> Result<SessionState, StateError> {
    use SessionEvent::{FetchFailed, PostsFetched, SessionConfirmed, SessionRejected, SubmitRequested};
    use SessionState::{
        CreateError, LoginFailure, PendingLogin, PendingPost, PostCompleted, PostSubmit,
    };

    match (state, event) {
        (PendingLogin, SessionConfirmed) => Ok(PendingPost),
        (PendingLogin, SessionRejected) => Ok(LoginFailure),
        (PendingPost | PostSubmit, PostsFetched) => Ok(PostCompleted),
        (PendingPost | PostSubmit, FetchFailed) => Ok(CreateError),
        (PendingPost | PostCompleted, SubmitRequested) => Ok(PostSubmit),
        _ => Err(StateError::IllegalTransition { state, event }),
    }
}

/// Events a state is allowed to consume
#[must_use]
pub fn allowed_events(state: SessionState) -> Vec<SessionEvent> {
    use SessionEvent::{FetchFailed, PostsFetched, SessionConfirmed, SessionRejected, SubmitRequested};

    match state {
        SessionState::PendingLogin => vec![SessionConfirmed, SessionRejected],
        SessionState::PendingPost => vec![PostsFetched, FetchFailed, SubmitRequested],
        SessionState::PostSubmit => vec![PostsFetched, FetchFailed],
        SessionState::PostCompleted => vec![SubmitRequested],
        SessionState::LoginFailure | SessionState::CreateError => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn login_transitions() {
        assert_eq!(
            transition(SessionState::PendingLogin, SessionEvent::SessionConfirmed),
            Ok(SessionState::PendingPost)
        );
        assert_eq!(
            transition(SessionState::PendingLogin, SessionEvent::SessionRejected),
            Ok(SessionState::LoginFailure)
        );

        // Invalid
        assert!(transition(SessionState::PendingLogin, SessionEvent::PostsFetched).is_err());
        assert!(transition(SessionState::PendingLogin, SessionEvent::SubmitRequested).is_err());
    }

    #[test]
    fn listing_transitions() {
        assert_eq!(
            transition(SessionState::PendingPost, SessionEvent::PostsFetched),
            Ok(SessionState::PostCompleted)
        );
        assert_eq!(
            transition(SessionState::PendingPost, SessionEvent::FetchFailed),
            Ok(SessionState::CreateError)
        );
    }

    #[test]
    fn submit_round_trip() {
        let state = transition(SessionState::PostCompleted, SessionEvent::SubmitRequested).unwrap();
        assert_eq!(state, SessionState::PostSubmit);
        assert_eq!(
            transition(state, SessionEvent::PostsFetched),
            Ok(SessionState::PostCompleted)
        );
    }

    #[test]
    fn failure_states_are_terminal() {
        assert!(SessionState::LoginFailure.is_terminal());
        assert!(SessionState::CreateError.is_terminal());
        assert!(!SessionState::PendingLogin.is_terminal());
    }

    fn any_state() -> impl Strategy<Value = SessionState> {
        prop_oneof![
            Just(SessionState::PendingLogin),
            Just(SessionState::LoginFailure),
            Just(SessionState::PendingPost),
            Just(SessionState::PostSubmit),
            Just(SessionState::CreateError),
            Just(SessionState::PostCompleted),
        ]
    }

    fn any_event() -> impl Strategy<Value = SessionEvent> {
        prop_oneof![
            Just(SessionEvent::SessionConfirmed),
            Just(SessionEvent::SessionRejected),
            Just(SessionEvent::PostsFetched),
            Just(SessionEvent::FetchFailed),
            Just(SessionEvent::SubmitRequested),
        ]
    }

    proptest! {
        #[test]
        fn prop_transition_matches_allowed_events(state in any_state(), event in any_event()) {
            let result = transition(state, event);
            let allowed = allowed_events(state);

            if result.is_ok() {
                prop_assert!(allowed.contains(&event));
            } else {
                prop_assert!(!allowed.contains(&event));
            }
        }
    }
}
