//! Form validation and multipart encoding.
//!
//! Forms hold raw input strings exactly as typed. `validate` produces either
//! a request DTO or messages for the UI; `EventForm::to_parts` is the single
//! place the create/update multipart layout is defined.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use crate::transport::{FormPart, Upload};
use crate::types::{Event, LoginRequest, RegisterRequest};

/// Field name to first error message, in field-name order.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// A message when either field is blank.
    pub fn validate(&self) -> Result<LoginRequest, &'static str> {
        let email = self.email.trim();
        let password = self.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err("Please enter your email and password.");
        }
        Ok(LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// A message for blank fields or a confirmation mismatch.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() || self.password.is_empty() || self.password_confirmation.is_empty()
        {
            return Err("Please fill in every field.");
        }
        if self.password != self.password_confirmation {
            return Err("Passwords do not match.");
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// Create/edit event input. `price` is kept as typed; an empty price means
/// a free event.
#[derive(Clone, Debug, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub city: String,
    pub is_public: bool,
    pub price: String,
    pub items: Vec<String>,
    pub image: Option<Upload>,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            city: String::new(),
            is_public: true,
            price: String::new(),
            items: Vec::new(),
            image: None,
        }
    }
}

impl EventForm {
    /// Prefill for the edit page.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            date: event.day().to_owned(),
            city: event.city.clone().unwrap_or_default(),
            is_public: !event.private,
            price: if event.price > 0.0 { format!("{:.2}", event.price) } else { String::new() },
            items: event.items.clone(),
            image: None,
        }
    }

    /// # Errors
    ///
    /// Per-field messages for every invalid field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.insert("title", "Title is required.".to_owned());
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required.".to_owned());
        }
        if self.date.trim().is_empty() {
            errors.insert("date", "Date is required.".to_owned());
        }
        if self.city.trim().is_empty() {
            errors.insert("city", "City is required.".to_owned());
        }
        if !self.price.trim().is_empty() && self.price_value().is_none() {
            errors.insert("price", "Invalid price.".to_owned());
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Parsed price. Blank is `0`; negative or non-numeric is `None`.
    #[must_use]
    pub fn price_value(&self) -> Option<f64> {
        let raw = self.price.trim();
        if raw.is_empty() {
            return Some(0.0);
        }
        raw.parse::<f64>().ok().filter(|p| p.is_finite() && *p >= 0.0)
    }

    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.price_value().is_some_and(|p| p > 0.0)
    }

    /// Append a trimmed item. Blank input is ignored.
    pub fn add_item(&mut self, item: &str) -> bool {
        let item = item.trim();
        if item.is_empty() {
            return false;
        }
        self.items.push(item.to_owned());
        true
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Multipart fields for create or update. Updates go out as `POST`, so
    /// they lead with the `_method=PUT` override.
    #[must_use]
    pub fn to_parts(&self, mode: FormMode) -> Vec<FormPart> {
        let mut parts = Vec::with_capacity(8 + self.items.len());
        if mode == FormMode::Update {
            parts.push(FormPart::text("_method", "PUT"));
        }
        let price = self.price.trim();
        parts.push(FormPart::text("title", self.title.trim()));
        parts.push(FormPart::text("description", self.description.trim()));
        parts.push(FormPart::text("date", self.date.trim()));
        parts.push(FormPart::text("city", self.city.trim()));
        parts.push(FormPart::text("private", if self.is_public { "0" } else { "1" }));
        parts.push(FormPart::text("price", if price.is_empty() { "0" } else { price }));
        parts.push(FormPart::text("is_paid", if self.is_paid() { "1" } else { "0" }));
        for item in self.items.iter().map(|i| i.trim()).filter(|i| !i.is_empty()) {
            parts.push(FormPart::text("items[]", item));
        }
        if let Some(upload) = &self.image {
            parts.push(FormPart::File {
                name: "image".to_owned(),
                upload: upload.clone(),
            });
        }
        parts
    }
}
