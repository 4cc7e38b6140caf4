//! Security tests: markup injection, signature tampering and input
//! validation properties

use proptest::prelude::*;

use crate::domain::notification::{REQUIRED_FIELDS, SIGNATURE};
use crate::tests::fixtures::{self, RECEIVER, SECRET};
use crate::{NotificationError, NotificationVerifier, PaymentRequest, ValidationError};

#[test]
fn test_form_escapes_injected_values() {
    let mut request = PaymentRequest::new(RECEIVER, "Order \"1\" <b>", "10").unwrap();
    request
        .set_comment("\"><script>alert('x')</script>")
        .set_success_url("https://shop.example.com/?a=1&b=2");

    let html = request.to_form_with("Pay \"now\"", "btn");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("name=\"targets\" value=\"Order &quot;1&quot; &lt;b&gt;\""));
    assert!(html.contains("name=\"successURL\" value=\"https://shop.example.com/?a=1&amp;b=2\""));
    assert!(html.contains("value=\"Pay &quot;now&quot;\""));
    // still exactly one element per field
    assert_eq!(html.matches("<input ").count(), 15);
}

#[test]
fn test_signature_compare_is_exact() {
    let signed = fixtures::signed_callback(fixtures::callback_fields(), SECRET);
    let signature = signed[SIGNATURE].clone();

    for candidate in [
        format!(" {signature}"),
        format!("{signature} "),
        signature[..39].to_string(),
        String::new(),
    ] {
        let fields = fixtures::callback_with_signature(&candidate);
        assert_eq!(
            NotificationVerifier::validate(fields, SECRET),
            Err(NotificationError::SignatureMismatch)
        );
    }
}

fn mutate(value: &str, index: usize, replacement: char) -> String {
    if value.is_empty() {
        return replacement.to_string();
    }
    let index = index % value.chars().count();
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i == index { replacement } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_valid_receivers_accepted(receiver in "[0-9]{12,16}") {
        prop_assert!(PaymentRequest::new(receiver, "Order", "1").is_ok());
    }

    #[test]
    fn prop_short_or_long_receivers_rejected(receiver in "[0-9]{0,11}|[0-9]{17,24}") {
        prop_assert!(matches!(
            PaymentRequest::new(receiver, "Order", "1"),
            Err(ValidationError::InvalidReceiver(_))
        ));
    }

    #[test]
    fn prop_receivers_with_non_digits_rejected(prefix in "[0-9]{6}", bad in "[^0-9]", suffix in "[0-9]{6}") {
        let receiver = format!("{prefix}{bad}{suffix}");
        prop_assert!(matches!(
            PaymentRequest::new(receiver, "Order", "1"),
            Err(ValidationError::InvalidReceiver(_))
        ));
    }

    #[test]
    fn prop_positive_sums_have_two_decimals(cents in 1u64..10_000_000_000, extra in 0u32..10) {
        let sum = format!("{}.{:02}{}", cents / 100, cents % 100, extra);
        let request = PaymentRequest::new(RECEIVER, "Order", sum.as_str()).unwrap();
        let rendered = request.sum().to_string();
        let (_, fraction) = rendered.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 2);
        prop_assert_eq!(rendered.matches('.').count(), 1);
    }

    #[test]
    fn prop_non_positive_sums_rejected(value in -1_000_000i64..=0) {
        prop_assert!(matches!(
            PaymentRequest::new(RECEIVER, "Order", value),
            Err(ValidationError::InvalidSum(_))
        ));
    }

    #[test]
    fn prop_single_character_mutation_rejected(
        field in 0usize..REQUIRED_FIELDS.len(),
        index in 0usize..64,
        replacement in "[a-zA-Z0-9&=]",
    ) {
        let signed = fixtures::signed_callback(fixtures::callback_fields(), SECRET);
        let name = REQUIRED_FIELDS[field];
        let original = signed[name].clone();
        let replacement = replacement.chars().next().unwrap();
        let mutated = mutate(&original, index, replacement);
        prop_assume!(mutated != original);

        let mut fields = signed;
        fields.insert(name.to_string(), mutated);
        prop_assert_eq!(
            NotificationVerifier::validate(fields, SECRET),
            Err(NotificationError::SignatureMismatch)
        );
    }
}
