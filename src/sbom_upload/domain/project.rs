use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Project classifier as understood by Dependency-Track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classifier {
    Application,
    Framework,
    Library,
    Container,
    Platform,
    OperatingSystem,
    Device,
    DeviceDriver,
    Firmware,
    File,
    MachineLearningModel,
    Data,
}

/// How a parent project computes its metrics from its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionLogic {
    None,
    AggregateDirectChildren,
    AggregateDirectChildrenWithTag,
    AggregateLatestVersionChildren,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// Project wire record
///
/// Only used to decode a lookup response and to encode a creation request.
/// Every field defaults so that an empty object decodes to a project with an
/// empty name, which the lookup treats as "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<Classifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_logic: Option<CollectionLogic>,
}

impl Project {
    /// Builds the record used to create an aggregating parent project.
    ///
    /// The parent aggregates findings from whichever child version is marked
    /// as latest.
    pub fn aggregate_parent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            classifier: Some(Classifier::Application),
            collection_logic: Some(CollectionLogic::AggregateLatestVersionChildren),
            ..Self::default()
        }
    }

    /// A decoded record without a name stands for a lookup miss
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
