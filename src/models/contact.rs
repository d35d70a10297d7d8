//! Contact/query relay types.
//!
//! Several unrelated forms (hero contact, services query, legal callback,
//! broker contact) post to the same upstream `send-email` endpoint. Each form
//! gets its own tagged request variant with its own required fields; the
//! single fixed wire shape the upstream expects is produced only at the
//! boundary, with the per-form placeholder values the mailer template relies
//! on.

use serde::{Deserialize, Serialize};

/// A contact/query submission, tagged by originating form.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "form", rename_all = "camelCase")]
pub enum ContactRequest {
    /// The landing-page contact form.
    #[serde(rename_all = "camelCase")]
    Hero {
        name: String,
        email: String,
        phone: String,
        #[serde(default)]
        message: Option<String>,
    },
    /// The short query box on the services page.
    #[serde(rename_all = "camelCase")]
    ServicesQuery { email: String, query: String },
    /// Callback request from the loans & legal page.
    #[serde(rename_all = "camelCase")]
    LegalCallback {
        full_name: String,
        phone: String,
        issue: String,
    },
}

impl ContactRequest {
    /// Fields that must be non-blank for this variant.
    pub fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            ContactRequest::Hero {
                name, email, phone, ..
            } => vec![("name", name), ("email", email), ("phone", phone)],
            ContactRequest::ServicesQuery { email, query } => {
                vec![("email", email), ("query", query)]
            }
            ContactRequest::LegalCallback {
                full_name,
                phone,
                issue,
            } => vec![("fullName", full_name), ("phone", phone), ("issue", issue)],
        }
    }
}

/// The fixed-shape payload the upstream mailer accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_desc: String,
    pub website_type: String,
    pub service: String,
    pub existing_website: String,
    pub existing_desc: String,
    pub project_desc: String,
}

impl EmailPayload {
    fn blank() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            business_name: String::new(),
            business_desc: String::new(),
            website_type: String::new(),
            service: String::new(),
            existing_website: String::new(),
            existing_desc: String::new(),
            project_desc: String::new(),
        }
    }
}

impl From<ContactRequest> for EmailPayload {
    fn from(request: ContactRequest) -> Self {
        match request {
            ContactRequest::Hero {
                name,
                email,
                phone,
                message,
            } => EmailPayload {
                full_name: name,
                email,
                phone,
                project_desc: message.unwrap_or_default(),
                ..EmailPayload::blank()
            },
            ContactRequest::ServicesQuery { email, query } => EmailPayload {
                email,
                project_desc: query,
                ..EmailPayload::blank()
            },
            // The mailer template prints every field, so absent ones carry the
            // "N/A" placeholders the legal form has always sent.
            ContactRequest::LegalCallback {
                full_name,
                phone,
                issue,
            } => EmailPayload {
                full_name,
                email: "not_provided@example.com".to_string(),
                phone,
                business_name: "N/A".to_string(),
                business_desc: "N/A".to_string(),
                website_type: "N/A".to_string(),
                service: "Legal Callback Request".to_string(),
                existing_website: "N/A".to_string(),
                existing_desc: "N/A".to_string(),
                project_desc: issue,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_fills_contact_fields_only() {
        let request = ContactRequest::Hero {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9876543210".to_string(),
            message: Some("Looking for a 2 BHK".to_string()),
        };

        let payload = EmailPayload::from(request);
        assert_eq!(payload.full_name, "Ravi");
        assert_eq!(payload.project_desc, "Looking for a 2 BHK");
        assert_eq!(payload.business_name, "");
        assert_eq!(payload.service, "");
    }

    #[test]
    fn test_legal_callback_carries_placeholders() {
        let request = ContactRequest::LegalCallback {
            full_name: "Meera".to_string(),
            phone: "9820012345".to_string(),
            issue: "Title dispute".to_string(),
        };

        let payload = EmailPayload::from(request);
        assert_eq!(payload.email, "not_provided@example.com");
        assert_eq!(payload.business_name, "N/A");
        assert_eq!(payload.service, "Legal Callback Request");
        assert_eq!(payload.project_desc, "Title dispute");
    }

    #[test]
    fn test_tagged_deserialization() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"form":"servicesQuery","email":"q@x.com","query":"Stamp duty?"}"#,
        )
        .unwrap();
        let payload = EmailPayload::from(request);
        assert_eq!(payload.email, "q@x.com");
        assert_eq!(payload.project_desc, "Stamp duty?");
        assert_eq!(payload.full_name, "");
    }

    #[test]
    fn test_wire_shape_is_camel_case_and_complete() {
        let payload = EmailPayload::from(ContactRequest::ServicesQuery {
            email: "q@x.com".to_string(),
            query: "Q".to_string(),
        });

        let wire = serde_json::to_value(&payload).unwrap();
        let object = wire.as_object().unwrap();
        for key in [
            "fullName",
            "email",
            "phone",
            "businessName",
            "businessDesc",
            "websiteType",
            "service",
            "existingWebsite",
            "existingDesc",
            "projectDesc",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object.len(), 10);
    }
}
