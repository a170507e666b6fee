use serde::{Deserialize, Deserializer, Serialize};

/// Reference to another entity (`{ "id": "b12" }`).
///
/// The API sometimes sends bare string ids for system entities
/// (e.g. `"UnknownDriverId"`), so both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityRef {
    pub id: String,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Bare(String),
            Object { id: String },
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Bare(id) | Shape::Object { id } => EntityRef { id },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_driver: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_groups: Option<Vec<EntityRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_groups: Option<Vec<EntityRef>>,
}

impl Driver {
    /// "first last" trimmed, then the user name, then the raw id.
    pub fn display_name(&self) -> String {
        let full = self.full_name();
        if !full.is_empty() {
            return full;
        }
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => self.id.clone(),
        }
    }

    /// "first last" trimmed; empty when neither part is set.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }

    /// Company groups win over driver groups when both are present.
    pub fn groups(&self) -> &[EntityRef] {
        self.company_groups
            .as_deref()
            .or(self.driver_groups.as_deref())
            .unwrap_or(&[])
    }

    pub fn in_group(&self, group_id: &str) -> bool {
        self.groups().iter().any(|g| g.id == group_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Device {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => &self.id,
        }
    }
}
