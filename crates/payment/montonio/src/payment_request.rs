use model::decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
}

/// Payment request signed into the payment token.
///
/// Fields are passed through unchanged; only the provider validates them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentInfo {
    pub amount: Decimal,
    pub currency: Currency,
    pub merchant_reference: String,
    pub merchant_return_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_notification_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_information_unstructured: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_information_structured: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselected_aspsp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preselected_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_last_name: Option<String>,
}

impl PaymentInfo {
    pub fn new(
        amount: Decimal,
        merchant_reference: impl Into<String>,
        merchant_return_url: impl Into<String>,
    ) -> Self {
        PaymentInfo {
            amount,
            currency: Currency::Eur,
            merchant_reference: merchant_reference.into(),
            merchant_return_url: merchant_return_url.into(),
            merchant_name: None,
            merchant_notification_url: None,
            payment_information_unstructured: None,
            payment_information_structured: None,
            preselected_aspsp: None,
            preselected_locale: None,
            checkout_email: None,
            checkout_phone_number: None,
            checkout_first_name: None,
            checkout_last_name: None,
        }
    }

    pub fn with_merchant_name(mut self, name: impl Into<String>) -> Self {
        self.merchant_name = Some(name.into());
        self
    }

    pub fn with_notification_url(mut self, url: impl Into<String>) -> Self {
        self.merchant_notification_url = Some(url.into());
        self
    }

    pub fn with_unstructured_description(mut self, description: impl Into<String>) -> Self {
        self.payment_information_unstructured = Some(description.into());
        self
    }

    pub fn with_structured_description(mut self, description: impl Into<String>) -> Self {
        self.payment_information_structured = Some(description.into());
        self
    }

    pub fn with_preselected_aspsp(mut self, aspsp: impl Into<String>) -> Self {
        self.preselected_aspsp = Some(aspsp.into());
        self
    }

    pub fn with_preselected_locale(mut self, locale: impl Into<String>) -> Self {
        self.preselected_locale = Some(locale.into());
        self
    }

    pub fn with_checkout_email(mut self, email: impl Into<String>) -> Self {
        self.checkout_email = Some(email.into());
        self
    }

    pub fn with_checkout_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.checkout_phone_number = Some(phone.into());
        self
    }

    pub fn with_checkout_name(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.checkout_first_name = Some(first_name.into());
        self.checkout_last_name = Some(last_name.into());
        self
    }
}
