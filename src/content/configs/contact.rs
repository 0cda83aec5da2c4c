use serde::{Deserialize, Serialize};

use super::{ConfigMeta, PageConfig};
use crate::content::ordering::{active_in_order, Orderable};

/// Opening hours row, e.g. "Mon - Fri" / "09:00 - 18:00"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkingHours {
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub hours: String,
}

/// One way of reaching the clinic (phone, e-mail, messaging app...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannel {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Orderable for ContactChannel {
    fn order(&self) -> i64 {
        self.order
    }

    fn active_flag(&self) -> Option<bool> {
        self.is_active
    }
}

/// Contact page document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ConfigMeta>,
    pub title: String,
    pub subtitle: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub address: String,
    pub working_hours: Vec<WorkingHours>,
    pub channels: Vec<ContactChannel>,
}

impl ContactConfig {
    pub fn active_channels(&self) -> Vec<&ContactChannel> {
        active_in_order(&self.channels)
    }
}

impl PageConfig for ContactConfig {
    const ENDPOINT: &'static str = "api/contact";
    const NAME: &'static str = "contact";
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            meta: Some(ConfigMeta {
                version: Some("1.0".to_string()),
                last_updated: None,
            }),
            title: "Contact Us".to_string(),
            subtitle: "Our patient coordinators are happy to answer your questions.".to_string(),
            phone: "+90 212 000 00 00".to_string(),
            email: "info@clinic.example".to_string(),
            whatsapp: Some("+90 530 000 00 00".to_string()),
            address: "Istanbul, Turkey".to_string(),
            working_hours: vec![
                WorkingHours {
                    days: "Monday - Friday".to_string(),
                    hours: "08:30 - 18:00".to_string(),
                },
                WorkingHours {
                    days: "Saturday".to_string(),
                    hours: "09:00 - 14:00".to_string(),
                },
            ],
            channels: vec![
                ContactChannel {
                    id: "phone".to_string(),
                    label: "Phone".to_string(),
                    value: "+90 212 000 00 00".to_string(),
                    href: Some("tel:+902120000000".to_string()),
                    order: 1,
                    is_active: None,
                },
                ContactChannel {
                    id: "email".to_string(),
                    label: "E-mail".to_string(),
                    value: "info@clinic.example".to_string(),
                    href: Some("mailto:info@clinic.example".to_string()),
                    order: 2,
                    is_active: None,
                },
                ContactChannel {
                    id: "whatsapp".to_string(),
                    label: "WhatsApp".to_string(),
                    value: "+90 530 000 00 00".to_string(),
                    href: Some("https://wa.me/905300000000".to_string()),
                    order: 3,
                    is_active: None,
                },
            ],
        }
    }
}
