//! Entity factory boundary
//!
//! The spawner only decides when and where. Materializing the entity is the
//! factory's job.

use serde::{Deserialize, Serialize};

use crate::Pose;

/// Name of the entity template to instantiate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef(pub String);

impl TemplateRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TemplateRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Something that can place an entity in the world
pub trait EntityFactory {
    /// Materialize `template` at `pose`. Returns false without side effects
    /// when the template is unknown or invalid.
    fn try_spawn(&mut self, template: &TemplateRef, pose: &Pose) -> bool;
}

impl<F> EntityFactory for F
where
    F: FnMut(&TemplateRef, &Pose) -> bool,
{
    fn try_spawn(&mut self, template: &TemplateRef, pose: &Pose) -> bool {
        self(template, pose)
    }
}

/// Record of one materialized entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnedEntity {
    pub id: u32,
    pub template: TemplateRef,
    pub pose: Pose,
}

/// Factory that records every spawn instead of building anything
#[derive(Debug, Clone, Default)]
pub struct SpawnLog {
    /// Spawned entities, oldest first
    pub entities: Vec<SpawnedEntity>,
    /// Templates accepted; empty accepts any non-empty name
    known_templates: Vec<TemplateRef>,
    next_id: u32,
}

impl SpawnLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept the given template names
    pub fn with_templates<I, T>(templates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TemplateRef>,
    {
        Self {
            known_templates: templates.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn accepts(&self, template: &TemplateRef) -> bool {
        if template.0.is_empty() {
            return false;
        }
        self.known_templates.is_empty() || self.known_templates.contains(template)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn last(&self) -> Option<&SpawnedEntity> {
        self.entities.last()
    }
}

impl EntityFactory for SpawnLog {
    fn try_spawn(&mut self, template: &TemplateRef, pose: &Pose) -> bool {
        if !self.accepts(template) {
            return false;
        }
        let id = self.next_entity_id();
        self.entities.push(SpawnedEntity {
            id,
            template: template.clone(),
            pose: *pose,
        });
        true
    }
}
