//! The resolved acting identity.
//!
//! Authentication and profile storage are external collaborators; by the time
//! a request reaches this core it has been resolved to a [`Traveler`] — id,
//! role, and the demographic attribute that feeds balance-policy checks.
//! The core treats all three fields as read-only.

use crate::UserId;

/// Demographic attribute supplied by the identity collaborator.
///
/// Required input to balance-policy evaluation; never mutated by this core.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Demographic {
    Male,
    Female,
    /// Other or unspecified.  Unconstrained under every balance policy except
    /// `FemaleOnly`.
    Other,
}

/// Platform role.  Guides are staff: they are assigned to trips but never
/// join them as participants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Member,
    Admin,
    Guide,
}

/// An acting user as resolved by the identity collaborator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traveler {
    pub id: UserId,
    pub role: Role,
    pub demographic: Demographic,
}

impl Traveler {
    pub fn new(id: UserId, role: Role, demographic: Demographic) -> Self {
        Self { id, role, demographic }
    }

    /// Shorthand for an ordinary member.
    pub fn member(id: UserId, demographic: Demographic) -> Self {
        Self::new(id, Role::Member, demographic)
    }

    #[inline]
    pub fn is_guide(&self) -> bool {
        self.role == Role::Guide
    }
}
