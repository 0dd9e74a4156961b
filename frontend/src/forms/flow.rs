//! Multi-step submission forms shown in the contact modal.
//!
//! Each form kind is a fixed list of steps; a step only advances once every
//! field on it validates.

use std::collections::HashMap;

use serde::Serialize;

use super::validation::{self, FieldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    Investor,
    Engineer,
    Restaurant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Phone,
    Url,
    Count,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub max_len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(key: &'static str, label: &'static str, input: InputKind, required: bool) -> FieldSpec {
    let max_len = match input {
        InputKind::TextArea => 2_000,
        _ => 200,
    };
    FieldSpec { key, label, input, required, max_len }
}

const WHO: StepSpec = StepSpec {
    title: "About you",
    fields: &[
        field("name", "Name", InputKind::Text, true),
        field("email", "Email", InputKind::Email, true),
    ],
};

const CONTACT_STEPS: &[StepSpec] = &[
    WHO,
    StepSpec {
        title: "Your message",
        fields: &[field("message", "Message", InputKind::TextArea, true)],
    },
];

const INVESTOR_STEPS: &[StepSpec] = &[
    WHO,
    StepSpec {
        title: "Your fund",
        fields: &[
            field("organization", "Organization", InputKind::Text, true),
            field("ticket_size", "Typical ticket size", InputKind::Text, false),
        ],
    },
    StepSpec {
        title: "Anything else",
        fields: &[field("message", "Message", InputKind::TextArea, false)],
    },
];

const ENGINEER_STEPS: &[StepSpec] = &[
    WHO,
    StepSpec {
        title: "Your work",
        fields: &[
            field("role", "Role you're interested in", InputKind::Text, true),
            field("portfolio_url", "GitHub or portfolio", InputKind::Url, false),
        ],
    },
    StepSpec {
        title: "Tell us more",
        fields: &[field("message", "Message", InputKind::TextArea, false)],
    },
];

const RESTAURANT_STEPS: &[StepSpec] = &[
    WHO,
    StepSpec {
        title: "Your kitchen",
        fields: &[
            field("restaurant", "Restaurant name", InputKind::Text, true),
            field("locations", "Number of locations", InputKind::Count, true),
            field("phone", "Phone", InputKind::Phone, false),
        ],
    },
];

impl FormKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            FormKind::Contact => "/api/contact",
            FormKind::Investor => "/api/investors",
            FormKind::Engineer => "/api/engineers",
            FormKind::Restaurant => "/api/restaurants",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Contact => "Get in touch",
            FormKind::Investor => "Invest in WasteWise",
            FormKind::Engineer => "Build with us",
            FormKind::Restaurant => "Book a kitchen demo",
        }
    }

    pub fn steps(self) -> &'static [StepSpec] {
        match self {
            FormKind::Contact => CONTACT_STEPS,
            FormKind::Investor => INVESTOR_STEPS,
            FormKind::Engineer => ENGINEER_STEPS,
            FormKind::Restaurant => RESTAURANT_STEPS,
        }
    }
}

pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return if spec.required {
            validation::required(spec.label, value)
        } else {
            Ok(())
        };
    }
    match spec.input {
        InputKind::Email => validation::email(value)?,
        InputKind::Phone => validation::phone(value)?,
        InputKind::Url => validation::url(value)?,
        InputKind::Count => {
            validation::positive_count(spec.label, value)?;
        }
        InputKind::Text | InputKind::TextArea => {}
    }
    validation::max_len(spec.label, value, spec.max_len)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowStatus {
    Editing,
    Submitting,
    Submitted,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorRequest {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub ticket_size: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineerRequest {
    pub name: String,
    pub email: String,
    pub role: String,
    pub portfolio_url: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantRequest {
    pub name: String,
    pub email: String,
    pub restaurant: String,
    pub locations: u32,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SubmissionRequest {
    Contact(ContactRequest),
    Investor(InvestorRequest),
    Engineer(EngineerRequest),
    Restaurant(RestaurantRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFlow {
    kind: FormKind,
    step: usize,
    values: HashMap<&'static str, String>,
    errors: HashMap<&'static str, FieldError>,
    pub status: FlowStatus,
}

impl FormFlow {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            step: 0,
            values: HashMap::new(),
            errors: HashMap::new(),
            status: FlowStatus::Editing,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.kind.steps().len()
    }

    pub fn current_step(&self) -> &'static StepSpec {
        &self.kind.steps()[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.step_count()
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, key: &str) -> Option<&FieldError> {
        self.errors.get(key)
    }

    /// Stores a field value and clears its stale error.
    pub fn set(&mut self, key: &'static str, value: String) {
        self.errors.remove(key);
        self.values.insert(key, value);
    }

    pub fn validate_step(&mut self) -> bool {
        let step = self.current_step();
        self.validate_fields(step.fields)
    }

    fn validate_fields(&mut self, fields: &[FieldSpec]) -> bool {
        let mut ok = true;
        for spec in fields {
            match validate_field(spec, self.value(spec.key)) {
                Ok(()) => {
                    self.errors.remove(spec.key);
                }
                Err(e) => {
                    self.errors.insert(spec.key, e);
                    ok = false;
                }
            }
        }
        ok
    }

    /// Moves to the next step if the current one validates.
    pub fn next(&mut self) -> bool {
        if self.is_last_step() || !self.validate_step() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    fn text(&self, key: &str) -> String {
        self.value(key).trim().to_string()
    }

    fn optional(&self, key: &str) -> Option<String> {
        Some(self.text(key)).filter(|v| !v.is_empty())
    }

    /// Validates every step and builds the request body. On failure the
    /// flow jumps back to the first step with an error.
    pub fn request(&mut self) -> Option<SubmissionRequest> {
        for (index, step) in self.kind.steps().iter().enumerate() {
            if !self.validate_fields(step.fields) {
                self.step = index;
                return None;
            }
        }

        let name = self.text("name");
        let email = self.text("email");
        let request = match self.kind {
            FormKind::Contact => SubmissionRequest::Contact(ContactRequest {
                name,
                email,
                message: self.text("message"),
            }),
            FormKind::Investor => SubmissionRequest::Investor(InvestorRequest {
                name,
                email,
                organization: self.text("organization"),
                ticket_size: self.optional("ticket_size"),
                message: self.optional("message"),
            }),
            FormKind::Engineer => SubmissionRequest::Engineer(EngineerRequest {
                name,
                email,
                role: self.text("role"),
                portfolio_url: self.optional("portfolio_url"),
                message: self.optional("message"),
            }),
            FormKind::Restaurant => SubmissionRequest::Restaurant(RestaurantRequest {
                name,
                email,
                restaurant: self.text("restaurant"),
                locations: validation::positive_count("Number of locations", self.value("locations"))
                    .ok()?,
                phone: self.optional("phone"),
            }),
        };
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_who(flow: &mut FormFlow) {
        flow.set("name", "Ada".into());
        flow.set("email", "ada@kitchen.fi".into());
    }

    #[test]
    fn cannot_advance_past_invalid_step() {
        let mut flow = FormFlow::new(FormKind::Contact);
        flow.set("email", "not-an-email".into());

        assert!(!flow.next());
        assert_eq!(flow.step_index(), 0);
        assert_eq!(flow.error("name"), Some(&FieldError::Required("Name")));
        assert_eq!(flow.error("email"), Some(&FieldError::InvalidEmail));

        flow.set("email", "ada@kitchen.fi".into());
        assert!(flow.error("email").is_none());
    }

    #[test]
    fn walks_steps_forward_and_back() {
        let mut flow = FormFlow::new(FormKind::Investor);
        fill_who(&mut flow);
        assert!(flow.next());
        assert_eq!(flow.current_step().title, "Your fund");
        assert!(!flow.next());

        flow.set("organization", "Compost Capital".into());
        assert!(flow.next());
        assert!(flow.is_last_step());
        assert!(!flow.next());

        assert!(flow.back());
        assert!(flow.back());
        assert!(!flow.back());
    }

    #[test]
    fn contact_request_body() {
        let mut flow = FormFlow::new(FormKind::Contact);
        fill_who(&mut flow);
        flow.set("message", "  We throw away too much bread.  ".into());

        let request = flow.request().unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@kitchen.fi",
                "message": "We throw away too much bread."
            })
        );
    }

    #[test]
    fn restaurant_request_parses_locations() {
        let mut flow = FormFlow::new(FormKind::Restaurant);
        fill_who(&mut flow);
        flow.set("restaurant", "Bistro Nolla".into());
        flow.set("locations", "2".into());

        match flow.request() {
            Some(SubmissionRequest::Restaurant(r)) => {
                assert_eq!(r.locations, 2);
                assert_eq!(r.phone, None);
            }
            other => panic!("unexpected request {:?}", other),
        }
    }

    #[test]
    fn request_jumps_back_to_first_invalid_step() {
        let mut flow = FormFlow::new(FormKind::Engineer);
        fill_who(&mut flow);
        assert!(flow.next());
        flow.set("role", "Rust".into());
        flow.set("portfolio_url", "my site".into());

        assert!(flow.request().is_none());
        assert_eq!(flow.step_index(), 1);
        assert_eq!(flow.error("portfolio_url"), Some(&FieldError::InvalidUrl));
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let spec = field("phone", "Phone", InputKind::Phone, false);
        assert!(validate_field(&spec, "").is_ok());
        assert_eq!(validate_field(&spec, "abc"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn endpoints_per_kind() {
        assert_eq!(FormKind::Restaurant.endpoint(), "/api/restaurants");
        assert_eq!(FormKind::Engineer.endpoint(), "/api/engineers");
        assert_eq!(FormKind::Investor.steps().len(), 3);
    }
}
