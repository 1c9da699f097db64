//! Rating session behaviour against an in-memory API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;
use reviewgate_client::api::{BusinessInfo, InteractionRecord, ReviewApi};
use reviewgate_client::error::{ClientError, SessionError};
use reviewgate_client::navigator::Navigator;
use reviewgate_client::session::{FeedbackForm, ReviewSession};
use reviewgate_core::error::CoreError;
use reviewgate_core::feedback::{CategorySet, Rejection, ValidFeedback};
use reviewgate_core::rating::{InteractionAction, REDIRECT_MESSAGE};

const BUSINESS_NOT_FOUND: &str = "Business not found or Invalid business ID!";
const GMB_URL: &str = "https://g.page/r/corner-cafe/review";

#[derive(Default)]
struct MockApi {
    known_business: bool,
    fail_writes: bool,
    interactions: Mutex<Vec<InteractionRecord>>,
    feedback: Mutex<Vec<ValidFeedback>>,
}

#[async_trait]
impl ReviewApi for MockApi {
    async fn fetch_business(&self, _business_id: &str) -> Result<BusinessInfo, ClientError> {
        if !self.known_business {
            return Err(ClientError::NotFound(BUSINESS_NOT_FOUND.into()));
        }
        Ok(BusinessInfo {
            name: "Corner Cafe".into(),
            description: None,
            image: None,
            gmb_url: GMB_URL.into(),
        })
    }

    async fn log_interaction(&self, record: &InteractionRecord) -> Result<(), ClientError> {
        if self.fail_writes {
            return Err(ClientError::HttpStatus(500));
        }
        self.interactions.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn submit_feedback(&self, submission: &ValidFeedback) -> Result<(), ClientError> {
        if self.fail_writes {
            return Err(ClientError::HttpStatus(500));
        }
        self.feedback.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

fn known() -> Arc<MockApi> {
    Arc::new(MockApi {
        known_business: true,
        ..Default::default()
    })
}

/// Navigator that records every URL it is sent to.
fn recording_navigator() -> (Arc<dyn Navigator>, Arc<Mutex<Vec<String>>>) {
    let visits = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&visits);
    let navigator: Arc<dyn Navigator> =
        Arc::new(move |url: &str| sink.lock().unwrap().push(url.to_string()));
    (navigator, visits)
}

async fn session(api: Arc<MockApi>) -> (ReviewSession, Arc<Mutex<Vec<String>>>) {
    let (navigator, visits) = recording_navigator();
    let session = ReviewSession::load(api, navigator, "cafe-1").await.unwrap();
    (session, visits)
}

/// Let spawned fire-and-forget tasks run.
async fn settle() {
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
}

fn valid_form() -> FeedbackForm {
    FeedbackForm {
        feedback: "This is valid feedback of 20+ characters.".into(),
        category: "Service".into(),
        customer_name: "Hamza Test".into(),
        email: "hamza@outlook.com".into(),
        phone: "03334444444".into(),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_business_fails_with_server_text() {
    let (navigator, _) = recording_navigator();
    let result = ReviewSession::load(Arc::new(MockApi::default()), navigator, "nope").await;

    assert_matches!(
        result,
        Err(SessionError::BusinessNotFound(msg)) if msg == BUSINESS_NOT_FOUND
    );
}

#[tokio::test]
async fn loaded_session_starts_unrated() {
    let (session, _) = session(known()).await;

    assert_eq!(session.business().name, "Corner Cafe");
    assert_eq!(session.selected_rating(), 0);
    assert_eq!(session.stars(), [false; 5]);
    assert!(!session.form_visible());
    assert_eq!(session.status_message(), None);
}

// ---------------------------------------------------------------------------
// Star fill
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn hover_previews_and_leave_restores_selection() {
    let (mut session, _) = session(known()).await;

    assert_eq!(session.hover(3), [true, true, true, false, false]);
    assert_eq!(session.leave(), [false; 5]);

    session.select(2).unwrap();
    assert_eq!(session.hover(5), [true; 5]);
    assert_eq!(session.leave(), [true, true, false, false, false]);
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn high_rating_redirects_after_fixed_delay() {
    let api = known();
    let (mut session, visits) = session(Arc::clone(&api)).await;

    let routing = session.select(5).unwrap();
    assert_eq!(routing.action, InteractionAction::RedirectedToGmb);
    assert_eq!(session.status_message(), Some(REDIRECT_MESSAGE));
    assert!(!session.form_visible());

    settle().await;
    let logged = api.interactions.lock().unwrap().clone();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].business_id, "cafe-1");
    assert_eq!(logged[0].rating.value(), 5);
    assert_eq!(logged[0].action, InteractionAction::RedirectedToGmb);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(visits.lock().unwrap().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(*visits.lock().unwrap(), vec![GMB_URL.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn low_rating_reveals_form_without_navigation() {
    let api = known();
    let (mut session, visits) = session(Arc::clone(&api)).await;

    for rating in 1..=3 {
        let routing = session.select(rating).unwrap();
        assert_eq!(routing.action, InteractionAction::ShownFeedbackForm);
        assert!(session.form_visible());
    }

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(visits.lock().unwrap().is_empty());
    assert_eq!(api.interactions.lock().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn later_selection_does_not_cancel_pending_redirect() {
    let (mut session, visits) = session(known()).await;

    session.select(4).unwrap();
    tokio::time::sleep(Duration::from_millis(500)).await;
    session.select(2).unwrap();

    tokio::time::sleep(Duration::from_millis(1600)).await;
    assert_eq!(visits.lock().unwrap().len(), 1);
    assert!(session.form_visible());
    assert_eq!(session.selected_rating(), 2);
}

#[tokio::test(start_paused = true)]
async fn interaction_log_failure_is_silent() {
    let api = Arc::new(MockApi {
        known_business: true,
        fail_writes: true,
        ..Default::default()
    });
    let (mut session, visits) = session(api).await;

    assert!(session.select(4).is_ok());
    tokio::time::sleep(Duration::from_millis(2001)).await;
    assert_eq!(visits.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn out_of_range_selection_is_rejected() {
    let api = known();
    let (mut session, _) = session(Arc::clone(&api)).await;

    assert_matches!(session.select(0), Err(SessionError::Core(CoreError::Validation(_))));
    assert_matches!(session.select(6), Err(SessionError::Core(CoreError::Validation(_))));
    assert_eq!(session.selected_rating(), 0);

    settle().await;
    assert!(api.interactions.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rejected_submission_keeps_form_values() {
    let api = known();
    let (mut session, _) = session(Arc::clone(&api)).await;
    session.select(2).unwrap();

    let mut form = valid_form();
    form.phone = "12334523ABC".into();
    let typed = form.clone();

    let err = session.submit(&mut form).await.unwrap_err();
    assert_matches!(err, SessionError::Core(CoreError::Rejected(Rejection::InvalidPhone)));
    assert_eq!(
        err.alert_message(),
        "Phone number must contain only digits (7–15 characters)."
    );

    assert_eq!(form, typed);
    assert!(session.form_visible());
    assert!(api.feedback.lock().unwrap().is_empty());

    // Correct and resubmit.
    form.phone = "03334444444".into();
    session.submit(&mut form).await.unwrap();
    assert_eq!(api.feedback.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn valid_submission_is_sent_trimmed_and_form_reset() {
    let api = known();
    let (mut session, _) = session(Arc::clone(&api)).await;
    session.select(2).unwrap();

    let mut form = FeedbackForm {
        feedback: "  This is valid feedback of 20+ characters.  ".into(),
        category: "Service".into(),
        customer_name: " Hamza Test ".into(),
        email: " hamza@outlook.com".into(),
        phone: "03334444444 ".into(),
    };

    session.submit(&mut form).await.unwrap();

    let sent = api.feedback.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].business_id, "cafe-1");
    assert_eq!(sent[0].rating.value(), 2);
    assert_eq!(sent[0].feedback, "This is valid feedback of 20+ characters.");
    assert_eq!(sent[0].customer_name.as_deref(), Some("Hamza Test"));
    assert_eq!(sent[0].email.as_deref(), Some("hamza@outlook.com"));
    assert_eq!(sent[0].phone.as_deref(), Some("03334444444"));

    assert_eq!(form, FeedbackForm::default());
    assert!(!session.form_visible());
    assert_eq!(
        session.status_message(),
        Some("Thank you for your feedback! We’ll use this to improve.")
    );
}

#[tokio::test(start_paused = true)]
async fn failed_feedback_write_still_resets_form() {
    let api = Arc::new(MockApi {
        known_business: true,
        fail_writes: true,
        ..Default::default()
    });
    let (mut session, _) = session(api).await;
    session.select(1).unwrap();

    let mut form = valid_form();
    session.submit(&mut form).await.unwrap();

    assert_eq!(form, FeedbackForm::default());
    assert!(!session.form_visible());
}

#[tokio::test]
async fn submission_without_low_rating_is_refused() {
    let (mut session, _) = session(known()).await;

    let mut form = valid_form();
    assert_matches!(
        session.submit(&mut form).await,
        Err(SessionError::Core(CoreError::Validation(_)))
    );
    assert_eq!(form, valid_form());
}

#[tokio::test(start_paused = true)]
async fn configured_categories_apply_to_form() {
    let api = known();
    let (session, _) = session(Arc::clone(&api)).await;
    let mut session = session.with_categories(CategorySet::from_csv("Food,Cleanliness"));
    session.select(3).unwrap();

    let mut form = valid_form();
    assert_matches!(
        session.submit(&mut form).await,
        Err(SessionError::Core(CoreError::Rejected(Rejection::CategoryRequired)))
    );

    form.category = "Food".into();
    assert!(session.submit(&mut form).await.is_ok());
}
