//! Workflow actors
//!
//! Every workflow call takes the acting user as an explicit parameter.
//! Roles are a closed set; the engine never reads identity from ambient
//! state.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::LecturerId;

/// Role held by a user of the claims system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Submits claims and resubmits queried ones
    Lecturer,
    /// Verifies or queries pending claims
    Coordinator,
    /// Approves or rejects verified claims
    Manager,
    /// Consumes approved claims for payment
    Hr,
    /// Administrative overrides (bulk status updates)
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Lecturer => "Lecturer",
            Role::Coordinator => "Coordinator",
            Role::Manager => "Manager",
            Role::Hr => "HR",
            Role::Admin => "Admin",
        };
        f.write_str(label)
    }
}

/// The user performing a workflow operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name recorded on stamps and audit entries
    pub name: String,
    /// Role the caller authenticated as
    pub role: Role,
    /// Lecturer identity, present only for lecturer actors
    pub lecturer_id: Option<LecturerId>,
}

impl Actor {
    /// Creates an actor with the given role
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            lecturer_id: None,
        }
    }

    /// Creates a lecturer actor carrying its lecturer identity
    pub fn lecturer(name: impl Into<String>, lecturer_id: LecturerId) -> Self {
        Self {
            name: name.into(),
            role: Role::Lecturer,
            lecturer_id: Some(lecturer_id),
        }
    }

    /// Creates a coordinator actor
    pub fn coordinator(name: impl Into<String>) -> Self {
        Self::new(name, Role::Coordinator)
    }

    /// Creates a manager actor
    pub fn manager(name: impl Into<String>) -> Self {
        Self::new(name, Role::Manager)
    }

    /// Creates an HR actor
    pub fn hr(name: impl Into<String>) -> Self {
        Self::new(name, Role::Hr)
    }

    /// Creates an admin actor
    pub fn admin(name: impl Into<String>) -> Self {
        Self::new(name, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Coordinator.to_string(), "Coordinator");
        assert_eq!(Role::Hr.to_string(), "HR");
    }

    #[test]
    fn test_lecturer_actor_carries_identity() {
        let id = LecturerId::new_v7();
        let actor = Actor::lecturer("t.ndlovu@uni.ac.za", id);
        assert_eq!(actor.role, Role::Lecturer);
        assert_eq!(actor.lecturer_id, Some(id));
    }

    #[test]
    fn test_reviewer_actors_have_no_lecturer_identity() {
        assert!(Actor::coordinator("c").lecturer_id.is_none());
        assert!(Actor::manager("m").lecturer_id.is_none());
        assert!(Actor::admin("a").lecturer_id.is_none());
    }
}
