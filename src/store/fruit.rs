//! Fruit record and submitted form types.

use serde::{Deserialize, Serialize};

/// Value an HTML checkbox submits when it is checked.
pub const CHECKBOX_ON: &str = "on";

/// A single fruit record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    /// Fruit name.
    #[serde(default)]
    pub name: String,
    /// Fruit color.
    #[serde(default)]
    pub color: String,
    /// Whether the fruit is ready to eat.
    #[serde(default)]
    pub ready_to_eat: bool,
}

impl Fruit {
    /// Create a new fruit record.
    pub fn new(name: impl Into<String>, color: impl Into<String>, ready_to_eat: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ready_to_eat,
        }
    }
}

/// Form key of the readiness checkbox.
pub const READY_FIELD: &str = "readyToEat";

/// Fields submitted by the new/edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FruitForm {
    /// Submitted name.
    pub name: Option<String>,
    /// Submitted color.
    pub color: Option<String>,
    /// Checkbox value; absent when unchecked.
    pub ready_to_eat: Option<String>,
}

impl FruitForm {
    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Never fails: unknown keys are ignored, absent keys stay `None`, and a
    /// key given more than once keeps all its values joined with `,`, so a
    /// repeated checkbox is not a plain `on`.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::default();

        for (key, value) in url::form_urlencoded::parse(body) {
            let slot = match &*key {
                "name" => &mut form.name,
                "color" => &mut form.color,
                READY_FIELD => &mut form.ready_to_eat,
                _ => continue,
            };
            if let Some(existing) = slot.as_mut() {
                existing.push(',');
                existing.push_str(&value);
            } else {
                *slot = Some(value.into_owned());
            }
        }

        form
    }

    /// Whether the readiness checkbox was checked.
    pub fn is_ready(&self) -> bool {
        self.ready_to_eat.as_deref() == Some(CHECKBOX_ON)
    }
}

impl From<FruitForm> for Fruit {
    fn from(form: FruitForm) -> Self {
        let ready_to_eat = form.is_ready();
        Self {
            name: form.name.unwrap_or_default(),
            color: form.color.unwrap_or_default(),
            ready_to_eat,
        }
    }
}
