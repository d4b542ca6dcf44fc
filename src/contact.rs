//! Contact form submission lifecycle.
//!
//! The controller only tracks state. Callers perform the delivery call
//! between [`ContactController::begin_submit`] and
//! [`ContactController::complete`], and arm a timer for the returned
//! [`BannerTicket`] after a successful delivery.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::delivery::DeliveryError;

/// How long the success banner stays visible.
pub const BANNER_DURATION: Duration = Duration::from_secs(5);
pub const SUCCESS_MESSAGE: &str = "Your message was sent successfully! 🚀";
pub const FAILURE_NOTICE: &str = "Your message could not be sent. Please try again later.";

/// The three required contact form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    #[serde(rename = "user_name")]
    pub name: String,
    #[serde(rename = "user_email")]
    pub email: String,
    pub message: String,
}

impl FormPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    SuccessVisible,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already in flight")]
    InFlight,
    #[error("No submission is in flight")]
    NotSending,
}

/// Permission to hide the success banner shown by one submission.
///
/// Only the most recently issued ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket {
    epoch: u64,
}

impl BannerTicket {
    pub fn delay(&self) -> Duration {
        BANNER_DURATION
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Delivered(BannerTicket),
    Failed(DeliveryError),
}

#[derive(Debug, Clone, Default)]
pub struct ContactController {
    state: SubmissionState,
    epoch: u64,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn submit_enabled(&self) -> bool {
        self.state != SubmissionState::Sending
    }

    pub fn banner_visible(&self) -> bool {
        self.state == SubmissionState::SuccessVisible
    }

    pub fn begin_submit(&mut self) -> Result<(), SubmitError> {
        match self.state {
            SubmissionState::Sending => Err(SubmitError::InFlight),
            SubmissionState::Idle | SubmissionState::SuccessVisible => {
                // a banner still on screen is hidden and its ticket goes stale
                self.epoch += 1;
                self.state = SubmissionState::Sending;
                Ok(())
            }
        }
    }

    pub fn complete(
        &mut self,
        outcome: Result<(), DeliveryError>,
    ) -> Result<Completion, SubmitError> {
        if self.state != SubmissionState::Sending {
            return Err(SubmitError::NotSending);
        }
        match outcome {
            Ok(()) => {
                self.epoch += 1;
                self.state = SubmissionState::SuccessVisible;
                Ok(Completion::Delivered(BannerTicket { epoch: self.epoch }))
            }
            Err(e) => {
                log::error!("Error sending email: {e}");
                self.state = SubmissionState::Idle;
                Ok(Completion::Failed(e))
            }
        }
    }

    /// Hides the banner if `ticket` belongs to the banner currently shown.
    pub fn banner_elapsed(&mut self, ticket: BannerTicket) -> bool {
        if self.state == SubmissionState::SuccessVisible && ticket.epoch == self.epoch {
            self.state = SubmissionState::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use http::StatusCode;

    use super::*;
    use crate::delivery::MessageDelivery;

    struct FakeDelivery {
        fail: bool,
        calls: Cell<usize>,
        received: RefCell<Vec<FormPayload>>,
    }

    impl FakeDelivery {
        fn succeeding() -> Self {
            Self {
                fail: false,
                calls: Cell::new(0),
                received: RefCell::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::succeeding()
            }
        }
    }

    #[async_trait(?Send)]
    impl MessageDelivery for FakeDelivery {
        async fn deliver(&self, payload: FormPayload) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            self.received.borrow_mut().push(payload);
            if self.fail {
                Err(DeliveryError::Rejected {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body: "unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn payload() -> FormPayload {
        FormPayload::new("Grace", "grace@example.com", "Let's talk")
    }

    // Drives one submit event the same way the contact form does
    async fn submit(
        controller: &mut ContactController,
        delivery: &FakeDelivery,
    ) -> Result<Completion, SubmitError> {
        controller.begin_submit()?;
        assert_eq!(controller.state(), SubmissionState::Sending);
        assert!(!controller.submit_enabled());
        let outcome = delivery.deliver(payload()).await;
        controller.complete(outcome)
    }

    #[test]
    fn test_initial_state() {
        let controller = ContactController::new();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.submit_enabled());
        assert!(!controller.banner_visible());
    }

    #[test]
    fn test_no_second_submit_while_sending() {
        let mut controller = ContactController::new();
        controller.begin_submit().unwrap();
        assert!(!controller.submit_enabled());
        assert_eq!(controller.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(controller.state(), SubmissionState::Sending);
    }

    #[test]
    fn test_complete_without_submit() {
        let mut controller = ContactController::new();
        assert_eq!(controller.complete(Ok(())), Err(SubmitError::NotSending));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_success_cycle() {
        let mut controller = ContactController::new();
        let delivery = FakeDelivery::succeeding();

        let completion = submit(&mut controller, &delivery).await.unwrap();
        let Completion::Delivered(ticket) = completion else {
            panic!("delivery should succeed");
        };
        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(delivery.received.borrow()[0], payload());
        assert_eq!(controller.state(), SubmissionState::SuccessVisible);
        assert!(controller.banner_visible());
        assert!(controller.submit_enabled());
        assert_eq!(ticket.delay(), Duration::from_secs(5));

        assert!(controller.banner_elapsed(ticket));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.banner_visible());
    }

    #[tokio::test]
    async fn test_failure_cycle() {
        let mut controller = ContactController::new();
        let delivery = FakeDelivery::failing();

        let completion = submit(&mut controller, &delivery).await.unwrap();
        assert!(matches!(
            completion,
            Completion::Failed(DeliveryError::Rejected { .. })
        ));
        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(controller.submit_enabled());
        assert!(!controller.banner_visible());
    }

    #[tokio::test]
    async fn test_repeated_success_cycles() {
        let mut controller = ContactController::new();
        let delivery = FakeDelivery::succeeding();

        let mut tickets = Vec::new();
        for _ in 0..2 {
            match submit(&mut controller, &delivery).await.unwrap() {
                Completion::Delivered(ticket) => {
                    assert!(controller.banner_elapsed(ticket));
                    tickets.push(ticket);
                }
                Completion::Failed(e) => panic!("unexpected failure: {e}"),
            }
            assert_eq!(controller.state(), SubmissionState::Idle);
        }
        assert_eq!(delivery.calls.get(), 2);
        assert_ne!(tickets[0], tickets[1]);
        // a late timer from either cycle changes nothing
        assert!(!controller.banner_elapsed(tickets[0]));
        assert!(!controller.banner_elapsed(tickets[1]));
        assert!(!controller.banner_visible());
    }

    #[tokio::test]
    async fn test_resubmit_while_banner_visible() {
        let mut controller = ContactController::new();
        let delivery = FakeDelivery::succeeding();

        let Completion::Delivered(first) = submit(&mut controller, &delivery).await.unwrap() else {
            panic!("delivery should succeed");
        };
        assert!(controller.banner_visible());

        controller.begin_submit().unwrap();
        assert!(!controller.banner_visible());
        // the first banner's timer fires while the second send is in flight
        assert!(!controller.banner_elapsed(first));
        assert_eq!(controller.state(), SubmissionState::Sending);

        let Ok(Completion::Delivered(second)) = controller.complete(Ok(())) else {
            panic!("delivery should succeed");
        };
        assert!(!controller.banner_elapsed(first));
        assert!(controller.banner_visible());
        assert!(controller.banner_elapsed(second));
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_failure_after_success_shows_no_banner() {
        let mut controller = ContactController::new();
        let Completion::Delivered(ticket) =
            submit(&mut controller, &FakeDelivery::succeeding()).await.unwrap()
        else {
            panic!("delivery should succeed");
        };

        let completion = submit(&mut controller, &FakeDelivery::failing()).await.unwrap();
        assert!(matches!(completion, Completion::Failed(_)));
        assert!(!controller.banner_elapsed(ticket));
        assert!(!controller.banner_visible());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }
}
