//! End-to-end scenarios over the public API

use crate::domain::notification::SIGNATURE;
use crate::domain::PARAMETER_NAMES;
use crate::tests::config;
use crate::tests::fixtures::{self, RECEIVER, SECRET};
use crate::{
    AppConfig, Notification, NotificationError, NotificationVerifier, PaymentRequest,
    ValidationError,
};

#[test]
fn test_url_scenario_prefix() {
    config::init();
    let url = fixtures::payment_request().to_url();
    assert!(url.starts_with(
        "https://money.yandex.ru/quickpay/confirm.xml?receiver=123456789012&targets=Order+%231\
         &sum=10.00&quickpay-form=shop&paymentType=AC"
    ));
}

#[test]
fn test_url_round_trip_after_setters() {
    let mut request = fixtures::payment_request();
    request
        .set_form_comment("Shop: order #1")
        .set_dest("Order #1 & co")
        .set_label("order-1")
        .set_comment("Позвоните перед доставкой")
        .set_success_url("https://shop.example.com/thanks?o=1")
        .set_need_fio(true)
        .set_need_phone(true);

    let url = request.to_url();
    let (_, query) = url.split_once('?').unwrap();
    let parsed = fixtures::parse_query(query);

    let names: Vec<&str> = parsed.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, PARAMETER_NAMES);

    let expected: Vec<(String, String)> = request
        .params()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(parsed, expected);

    let value = |name: &str| parsed.iter().find(|(k, _)| k == name).unwrap().1.clone();
    assert_eq!(value("short-dest"), "Order #1 & co");
    assert_eq!(value("successURL"), "https://shop.example.com/thanks?o=1");
    assert_eq!(value("need-fio"), "1");
    assert_eq!(value("need-email"), "");
}

#[test]
fn test_form_matches_url_values() {
    let mut request = fixtures::payment_request();
    request.set_label("order-1").set_need_address(true);

    let html = request.to_form();
    assert_eq!(html.matches("<input type=\"hidden\"").count(), 14);
    assert_eq!(html.matches("<input type=\"submit\"").count(), 1);

    let mut last = 0;
    for (name, value) in request.params() {
        let input = format!("<input type=\"hidden\" name=\"{name}\" value=\"{value}\">");
        let position = html.find(&input).unwrap_or_else(|| panic!("missing {input}"));
        assert!(position > last, "{name} is out of order");
        last = position;
    }
}

#[test]
fn test_validation_is_fail_fast() {
    let result = PaymentRequest::new("not-a-wallet", "", "-1");
    assert_eq!(
        result,
        Err(ValidationError::InvalidReceiver("not-a-wallet".to_string()))
    );
}

#[test]
fn test_callback_scenario_precomputed() {
    config::init();
    let fields = fixtures::callback_with_signature("774333423b42bfa3fb7dc355d7dbe4a24b2d00cf");
    let accepted = NotificationVerifier::validate(fields.clone(), SECRET).unwrap();
    assert_eq!(accepted, fields);
}

#[test]
fn test_callback_scenario_wrong_signature() {
    let fields = fixtures::callback_with_signature("0000000000000000000000000000000000000000");
    assert_eq!(
        NotificationVerifier::validate(fields, SECRET),
        Err(NotificationError::SignatureMismatch)
    );
}

#[test]
fn test_gateway_documentation_example() {
    let fields: crate::NotificationFields = [
        ("notification_type", "card-incoming"),
        ("operation_id", "904035776918098009"),
        ("amount", "98.00"),
        ("withdraw_amount", "100.00"),
        ("currency", "643"),
        ("datetime", "2014-04-28T16:31:28Z"),
        ("sender", ""),
        ("codepro", "false"),
        ("label", "order-17"),
        ("sha1_hash", "c31b7fc26299c22b731b547786dde0b4be8d7e2a"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let verifier = NotificationVerifier::new("01234567890ABCDEF01234567890");
    let accepted = verifier.verify(fields).unwrap();
    let notification = Notification::try_from(&accepted).unwrap();
    assert_eq!(notification.label, "order-17");
    assert_eq!(notification.withdraw_amount.map(|a| a.to_string()).as_deref(), Some("100.00"));
}

#[test]
fn test_config_driven_round_trip() {
    let config = AppConfig::from_toml_str(&format!(
        "[gateway]\nreceiver = \"{RECEIVER}\"\n\n[notifications]\nsecret = \"{SECRET}\"\n"
    ))
    .unwrap();

    let mut request = config.payment_request("Order #7", 7.5_f64).unwrap();
    request.set_label("order-7");
    assert!(request.to_url().contains("&sum=7.50&"));

    let mut fields = fixtures::callback_fields();
    fields.insert("label".to_string(), request.label().to_string());
    let fields = fixtures::signed_callback(fields, SECRET);

    let accepted = config.verifier().unwrap().verify(fields).unwrap();
    assert_eq!(accepted["label"], "order-7");
    assert!(accepted.contains_key(SIGNATURE));
}
