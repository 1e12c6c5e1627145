//! User-facing notices for create, update and delete attempts.

use crate::types::DbId;

/// The kind of write being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    Delete,
}

impl MutationKind {
    fn past_tense(self) -> &'static str {
        match self {
            MutationKind::Create => "listed",
            MutationKind::Update => "updated",
            MutationKind::Delete => "deleted",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MutationKind::Create => "create",
            MutationKind::Update => "update",
            MutationKind::Delete => "delete",
        }
    }
}

/// What a mutation acts on, for logging and notices.
///
/// `name` is the display name when one is known (from the submitted form, or
/// from the row once it has been loaded); otherwise `id` is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub kind: MutationKind,
    pub entity: &'static str,
    pub name: Option<String>,
    pub id: Option<DbId>,
}

impl Subject {
    pub fn create(entity: &'static str, name: Option<String>) -> Self {
        Self {
            kind: MutationKind::Create,
            entity,
            name,
            id: None,
        }
    }

    pub fn update(entity: &'static str, id: DbId, name: Option<String>) -> Self {
        Self {
            kind: MutationKind::Update,
            entity,
            name,
            id: Some(id),
        }
    }

    pub fn delete(entity: &'static str, id: DbId) -> Self {
        Self {
            kind: MutationKind::Delete,
            entity,
            name: None,
            id: Some(id),
        }
    }

    /// Fill in the display name if none was known up front.
    pub fn with_name(mut self, name: Option<&str>) -> Self {
        if self.name.is_none() {
            self.name = name.map(str::to_string);
        }
        self
    }

    fn label(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) if !name.trim().is_empty() => format!("{} {}", self.entity, name),
            (_, Some(id)) => format!("{} #{}", self.entity, id),
            _ => self.entity.to_string(),
        }
    }

    /// e.g. `Venue The Musical Hop was successfully listed!`
    pub fn success_message(&self) -> String {
        format!("{} was successfully {}!", self.label(), self.kind.past_tense())
    }

    /// e.g. `An error occurred. Venue The Musical Hop could not be listed.`
    pub fn failure_message(&self) -> String {
        format!(
            "An error occurred. {} could not be {}.",
            self.label(),
            self.kind.past_tense()
        )
    }
}
