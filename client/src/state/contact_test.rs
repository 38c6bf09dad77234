use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello".into(),
        status: SubmitStatus::Idle,
    }
}

#[test]
fn default_is_idle_and_empty() {
    let form = ContactForm::default();
    assert_eq!(form.status, SubmitStatus::Idle);
    assert!(form.name.is_empty());
    assert_eq!(form.button_label(), "Send");
}

#[test]
fn set_updates_each_field() {
    let mut form = ContactForm::default();
    form.set(Field::Name, "N".into());
    form.set(Field::Email, "E".into());
    form.set(Field::Message, "M".into());
    assert_eq!((form.name.as_str(), form.email.as_str(), form.message.as_str()), ("N", "E", "M"));
}

#[test]
fn begin_submit_trims_and_marks_sending() {
    let mut form = filled();
    form.name = "  Ada  ".into();
    let request = form.begin_submit().unwrap();
    assert_eq!(request.name, "Ada");
    assert_eq!(form.status, SubmitStatus::Sending);
    assert_eq!(form.button_label(), "Sending...");
}

#[test]
fn begin_submit_rejects_blank_fields() {
    let mut form = filled();
    form.message = "   ".into();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status, SubmitStatus::Failed(MISSING_FIELDS_MESSAGE.into()));
}

#[test]
fn second_submit_while_sending_is_ignored() {
    let mut form = filled();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert_eq!(form.status, SubmitStatus::Sending);
}

#[test]
fn success_clears_fields() {
    let mut form = filled();
    form.begin_submit();
    form.finish(Ok(()));
    assert_eq!(form.status, SubmitStatus::Sent);
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
}

#[test]
fn failure_keeps_fields_and_reports() {
    let mut form = filled();
    form.begin_submit();
    form.finish(Err("contact request failed: 500".into()));
    assert_eq!(form.status, SubmitStatus::Failed(FAILED_MESSAGE.into()));
    assert_eq!(form.name, "Ada");
}

#[test]
fn can_resubmit_after_failure() {
    let mut form = filled();
    form.begin_submit();
    form.finish(Err("offline".into()));
    assert!(form.begin_submit().is_some());
}
