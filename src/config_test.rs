use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(port_from_lookup(lookup(&[])), Ok(DEFAULT_PORT));
    assert_eq!(port_from_lookup(lookup(&[("PORT", "  ")])), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_override() {
    assert_eq!(port_from_lookup(lookup(&[("PORT", "8080")])), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(port_from_lookup(lookup(&[("PORT", "eighty")])), Err(ConfigError::InvalidPort("eighty".into())));
    assert!(port_from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn mail_requires_api_key() {
    let err = MailConfig::from_lookup(lookup(&[("CONTACT_FROM", "site@kylife.test")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "RESEND_API_KEY" });
    assert_eq!(err.to_string(), "RESEND_API_KEY is not set");
}

#[test]
fn mail_requires_sender() {
    let err = MailConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_123")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "CONTACT_FROM" });
}

#[test]
fn mail_recipient_defaults_to_sender() {
    let cfg =
        MailConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_123"), ("CONTACT_FROM", " site@kylife.test ")])).unwrap();
    assert_eq!(cfg.from, "site@kylife.test");
    assert_eq!(cfg.to, "site@kylife.test");
}

#[test]
fn mail_recipient_override() {
    let cfg = MailConfig::from_lookup(lookup(&[
        ("RESEND_API_KEY", "re_123"),
        ("CONTACT_FROM", "site@kylife.test"),
        ("CONTACT_TO", "inbox@kylife.test"),
    ]))
    .unwrap();
    assert_eq!(cfg.to, "inbox@kylife.test");
}

#[test]
fn debug_redacts_api_key() {
    let cfg = MailConfig { api_key: "re_secret".into(), from: "a@b.test".into(), to: "a@b.test".into() };
    let shown = format!("{cfg:?}");
    assert!(!shown.contains("re_secret"));
    assert!(shown.contains("<redacted>"));
}
