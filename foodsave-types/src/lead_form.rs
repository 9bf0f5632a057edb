// SPDX-License-Identifier: MIT OR Apache-2.0

//! Investment-interest lead form.
//!
//! The form is purely client side: values live in memory while the dialog
//! is open and are wiped on submit or cancel. Nothing is sent anywhere.

/// Fields of the lead form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Phone,
    InvestmentAmount,
    Message,
}

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Multiline,
}

impl InputKind {
    /// Value of the `type` attribute for `<input>` kinds.
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::Multiline => None,
        }
    }
}

impl LeadField {
    pub const ALL: [LeadField; 6] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::Phone,
        LeadField::InvestmentAmount,
        LeadField::Message,
    ];

    /// The `name` attribute used on the form control.
    pub fn html_name(&self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Company => "company",
            LeadField::Phone => "phone",
            LeadField::InvestmentAmount => "investmentAmount",
            LeadField::Message => "message",
        }
    }

    pub fn from_html_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.html_name() == name)
    }

    pub fn is_required(&self) -> bool {
        matches!(self, LeadField::Name | LeadField::Email)
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            LeadField::Email => InputKind::Email,
            LeadField::Phone => InputKind::Tel,
            LeadField::Message => InputKind::Multiline,
            _ => InputKind::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub investment_amount: String,
    pub message: String,
}

impl LeadForm {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::Phone => &self.phone,
            LeadField::InvestmentAmount => &self.investment_amount,
            LeadField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Company => &mut self.company,
            LeadField::Phone => &mut self.phone,
            LeadField::InvestmentAmount => &mut self.investment_amount,
            LeadField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: LeadField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Required fields with no value, matching the browser's `required`
    /// check: whitespace counts as a value.
    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        self.missing_required().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        LeadField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_start_empty() {
        let form = LeadForm::default();
        assert!(form.is_empty());
        for field in LeadField::ALL {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn set_and_get_each_field() {
        let mut form = LeadForm::default();
        for (i, field) in LeadField::ALL.into_iter().enumerate() {
            form.set(field, format!("value-{i}"));
        }
        for (i, field) in LeadField::ALL.into_iter().enumerate() {
            assert_eq!(form.get(field), format!("value-{i}"));
        }
        assert_eq!(form.investment_amount, "value-4");
    }

    #[test]
    fn name_and_email_are_required() {
        let form = LeadForm::default();
        assert_eq!(
            form.missing_required(),
            vec![LeadField::Name, LeadField::Email]
        );
        assert!(!form.is_submittable());

        let form = form.with(LeadField::Name, "Ivan");
        assert_eq!(form.missing_required(), vec![LeadField::Email]);

        let form = form
            .with(LeadField::Name, "Ivan")
            .with(LeadField::Email, "ivan@example.com");
        assert!(form.is_submittable());
        assert!(form.company.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_filled() {
        let form = LeadForm::default()
            .with(LeadField::Name, "   ")
            .with(LeadField::Email, "ivan@example.com");
        assert!(form.missing_required().is_empty());
        assert!(form.is_submittable());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = LeadForm::default()
            .with(LeadField::Name, "Ivan")
            .with(LeadField::Email, "ivan@example.com")
            .with(LeadField::Message, "hello");
        assert!(!form.is_empty());
        form.reset();
        assert!(form.is_empty());
        assert_eq!(form, LeadForm::default());
    }

    #[test]
    fn html_names_round_trip() {
        for field in LeadField::ALL {
            assert_eq!(LeadField::from_html_name(field.html_name()), Some(field));
        }
        assert_eq!(
            LeadField::InvestmentAmount.html_name(),
            "investmentAmount"
        );
        assert_eq!(LeadField::from_html_name("unknown"), None);
    }

    #[test]
    fn input_kinds() {
        assert_eq!(LeadField::Email.input_kind().html_type(), Some("email"));
        assert_eq!(LeadField::Phone.input_kind().html_type(), Some("tel"));
        assert_eq!(LeadField::Message.input_kind(), InputKind::Multiline);
        assert_eq!(LeadField::Company.input_kind().html_type(), Some("text"));
    }
}
