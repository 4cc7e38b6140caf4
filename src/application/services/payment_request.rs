//! Payment request builder
//!
//! Required fields are validated once at construction and are immutable
//! afterwards. Optional fields are set through chained setters and always
//! serialize, so every rendering carries the same fourteen parameters in
//! the same order.
//!
//! A `PaymentRequest` has no internal synchronization; mutate it from one
//! place at a time.

use crate::domain::payments::{Amount, FormKind, PaymentParams, PaymentType};
use crate::infrastructure::rendering::{FormRenderer, Parameters, QueryRenderer};
use crate::infrastructure::Redirect;
use crate::shared::error::ValidationError;
use crate::shared::logging::LoggingUtils;
use crate::shared::validation::ValidationUtils;

/// Gateway confirmation endpoint
pub const QUICKPAY_ENDPOINT: &str = "https://money.yandex.ru/quickpay/confirm.xml";

/// Default submit button text for [`PaymentRequest::to_form`]
pub const DEFAULT_BUTTON_TEXT: &str = "Pay";

/// Default submit button CSS class for [`PaymentRequest::to_form`]
pub const DEFAULT_BUTTON_CLASS: &str = "button";

/// Boolean flags go on the wire as "1" for true and "" for false
fn flag(value: bool) -> String {
    if value { "1".to_string() } else { String::new() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    endpoint: String,

    receiver: String,
    targets: String,
    sum: Amount,
    form: FormKind,
    payment_type: PaymentType,

    formcomment: String,
    short_dest: String,
    label: String,
    comment: String,
    success_url: String,
    need_fio: bool,
    need_email: bool,
    need_phone: bool,
    need_address: bool,
}

impl PaymentRequest {
    /// Shop form paid by bank card
    pub fn new<S>(
        receiver: impl Into<String>,
        targets: impl Into<String>,
        sum: S,
    ) -> Result<Self, ValidationError>
    where
        S: TryInto<Amount, Error = ValidationError>,
    {
        Self::with_kind(receiver, targets, sum, FormKind::default(), PaymentType::default())
    }

    /// Form kind and payment type given as their wire strings
    pub fn with_options<S>(
        receiver: impl Into<String>,
        targets: impl Into<String>,
        sum: S,
        form: &str,
        payment_type: &str,
    ) -> Result<Self, ValidationError>
    where
        S: TryInto<Amount, Error = ValidationError>,
    {
        let receiver = receiver.into();
        let targets = targets.into();
        ValidationUtils::validate_receiver(&receiver)?;
        ValidationUtils::validate_target(&targets)?;
        let sum = sum.try_into()?;
        let form = form.parse()?;
        let payment_type = payment_type.parse()?;
        Ok(Self::build(receiver, targets, sum, form, payment_type))
    }

    pub fn with_kind<S>(
        receiver: impl Into<String>,
        targets: impl Into<String>,
        sum: S,
        form: FormKind,
        payment_type: PaymentType,
    ) -> Result<Self, ValidationError>
    where
        S: TryInto<Amount, Error = ValidationError>,
    {
        let receiver = receiver.into();
        let targets = targets.into();
        ValidationUtils::validate_receiver(&receiver)?;
        ValidationUtils::validate_target(&targets)?;
        let sum = sum.try_into()?;
        Ok(Self::build(receiver, targets, sum, form, payment_type))
    }

    fn build(
        receiver: String,
        targets: String,
        sum: Amount,
        form: FormKind,
        payment_type: PaymentType,
    ) -> Self {
        LoggingUtils::log_payment_created(&receiver, &sum.to_string(), form.as_str(), payment_type.as_str());
        Self {
            endpoint: QUICKPAY_ENDPOINT.to_string(),
            receiver,
            targets,
            sum,
            form,
            payment_type,
            formcomment: String::new(),
            short_dest: String::new(),
            label: String::new(),
            comment: String::new(),
            success_url: String::new(),
            need_fio: false,
            need_email: false,
            need_phone: false,
            need_address: false,
        }
    }

    /// Point rendering at another gateway, e.g. a local mock
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) -> &mut Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Payment name shown in the payer's history
    pub fn set_form_comment(&mut self, value: impl Into<String>) -> &mut Self {
        self.formcomment = value.into();
        self
    }

    /// Payment name shown on the confirmation page
    pub fn set_dest(&mut self, value: impl Into<String>) -> &mut Self {
        self.short_dest = value.into();
        self
    }

    /// Merchant's order or invoice reference, echoed back in the notification
    pub fn set_label(&mut self, value: impl Into<String>) -> &mut Self {
        self.label = value.into();
        self
    }

    pub fn set_comment(&mut self, value: impl Into<String>) -> &mut Self {
        self.comment = value.into();
        self
    }

    /// Where the payer lands after paying
    pub fn set_success_url(&mut self, value: impl Into<String>) -> &mut Self {
        self.success_url = value.into();
        self
    }

    pub fn set_need_fio(&mut self, value: bool) -> &mut Self {
        self.need_fio = value;
        self
    }

    pub fn set_need_email(&mut self, value: bool) -> &mut Self {
        self.need_email = value;
        self
    }

    pub fn set_need_phone(&mut self, value: bool) -> &mut Self {
        self.need_phone = value;
        self
    }

    pub fn set_need_address(&mut self, value: bool) -> &mut Self {
        self.need_address = value;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn targets(&self) -> &str {
        &self.targets
    }

    pub fn sum(&self) -> Amount {
        self.sum
    }

    pub fn form(&self) -> FormKind {
        self.form
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All fourteen parameters in canonical order
    pub fn params(&self) -> Parameters {
        vec![
            ("receiver", self.receiver.clone()),
            ("targets", self.targets.clone()),
            ("sum", self.sum.to_string()),
            ("quickpay-form", self.form.as_str().to_string()),
            ("paymentType", self.payment_type.as_str().to_string()),
            ("formcomment", self.formcomment.clone()),
            ("short-dest", self.short_dest.clone()),
            ("label", self.label.clone()),
            ("comment", self.comment.clone()),
            ("successURL", self.success_url.clone()),
            ("need-fio", flag(self.need_fio)),
            ("need-email", flag(self.need_email)),
            ("need-phone", flag(self.need_phone)),
            ("need-address", flag(self.need_address)),
        ]
    }

    /// Payment link: endpoint plus the urlencoded parameters
    pub fn to_url(&self) -> String {
        let params = self.params();
        LoggingUtils::log_rendered("url", &self.endpoint, params.len());
        QueryRenderer::url(&self.endpoint, &params)
    }

    /// POST form with the default button text and class
    pub fn to_form(&self) -> String {
        self.to_form_with(DEFAULT_BUTTON_TEXT, DEFAULT_BUTTON_CLASS)
    }

    pub fn to_form_with(&self, button_text: &str, button_class: &str) -> String {
        let params = self.params();
        LoggingUtils::log_rendered("form", &self.endpoint, params.len());
        FormRenderer::render(&self.endpoint, &params, button_text, button_class)
    }

    /// Redirect for the host HTTP layer to send
    pub fn redirect(&self) -> Redirect {
        Redirect::new(self.to_url())
    }
}

impl TryFrom<PaymentParams> for PaymentRequest {
    type Error = ValidationError;

    fn try_from(params: PaymentParams) -> Result<Self, Self::Error> {
        params.check()?;

        let mut request = Self::with_options(
            params.receiver,
            params.targets,
            params.sum.as_str(),
            &params.form,
            &params.payment_type,
        )?;
        request
            .set_form_comment(params.formcomment)
            .set_dest(params.short_dest)
            .set_label(params.label)
            .set_comment(params.comment)
            .set_success_url(params.success_url)
            .set_need_fio(params.need_fio)
            .set_need_email(params.need_email)
            .set_need_phone(params.need_phone)
            .set_need_address(params.need_address);
        Ok(request)
    }
}
