use std::sync::Mutex;

use super::*;

/// Records every message instead of sending it.
#[derive(Default)]
struct RecordingRelay {
    sent: Mutex<Vec<ContactMessage>>,
    fail: bool,
}

#[async_trait]
impl MailRelay for RecordingRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        if self.fail {
            return Err(ContactError::Delivery("smtp down".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest { name: name.into(), email: email.into(), message: message.into() }
}

#[test]
fn from_request_trims_fields() {
    let msg = ContactMessage::from_request(&request("  Ky ", "ky@example.com\n", " hi there ")).unwrap();
    assert_eq!(msg, ContactMessage { name: "Ky".into(), email: "ky@example.com".into(), message: "hi there".into() });
}

#[test]
fn from_request_rejects_blank_fields() {
    for req in [request("", "a@b.test", "hi"), request("Ky", "   ", "hi"), request("Ky", "a@b.test", "\t")] {
        assert!(matches!(ContactMessage::from_request(&req), Err(ContactError::MissingFields)));
    }
}

#[test]
fn subject_and_body_format() {
    let msg = ContactMessage::from_request(&request("Ky", "ky@example.com", "Hello")).unwrap();
    assert_eq!(msg.subject(), "Contact Form Submission from Ky");
    assert_eq!(msg.text_body(), "Name: Ky\nEmail: ky@example.com\nMessage: Hello");
}

#[tokio::test]
async fn submit_relays_valid_message() {
    let relay = RecordingRelay::default();
    submit(Some(&relay), &request("Ky", "ky@example.com", "Hello")).await.unwrap();
    let sent = relay.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Ky");
}

#[tokio::test]
async fn submit_validates_before_relay_check() {
    let err = submit(None, &request("", "", "")).await.unwrap_err();
    assert!(matches!(err, ContactError::MissingFields));
}

#[tokio::test]
async fn submit_without_relay_is_unavailable() {
    let err = submit(None, &request("Ky", "ky@example.com", "Hello")).await.unwrap_err();
    assert!(matches!(err, ContactError::RelayUnavailable));
}

#[tokio::test]
async fn submit_surfaces_delivery_failure() {
    let relay = RecordingRelay { fail: true, ..RecordingRelay::default() };
    let err = submit(Some(&relay), &request("Ky", "ky@example.com", "Hello")).await.unwrap_err();
    assert!(matches!(err, ContactError::Delivery(ref m) if m == "smtp down"));
    assert!(relay.sent.lock().unwrap().is_empty());
}
