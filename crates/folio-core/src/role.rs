//! Viewer roles.
//!
//! The role only decides which controls are rendered. It is not an
//! authorization boundary: collection operations never look at it.

use self::Role::*;
use std::fmt;

/// The role of the viewer of a profile page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    /// The owner of the profile, configured as `user`.
    Owner,
    /// A visitor, configured as `visitor`.
    #[default]
    Visitor,
    /// Any other value, rendered read-only like a visitor.
    Other(String),
}

impl Role {
    /// Returns `true` if the add, edit and delete controls should be rendered.
    #[inline]
    pub fn can_edit(&self) -> bool {
        matches!(self, Owner)
    }

    /// Returns `true` if the follow and message buttons should be rendered.
    #[inline]
    pub fn is_visitor(&self) -> bool {
        matches!(self, Visitor)
    }

    /// Returns the role as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Owner => "user",
            Visitor => "visitor",
            Other(role) => role,
        }
    }
}

impl fmt::Display for Role {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Role {
    #[inline]
    fn from(role: &str) -> Self {
        match role {
            "user" => Owner,
            "visitor" => Visitor,
            _ => Other(role.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn it_parses_roles() {
        assert_eq!(Role::from("user"), Role::Owner);
        assert!(Role::from("user").can_edit());

        let visitor = Role::from("visitor");
        assert!(visitor.is_visitor());
        assert!(!visitor.can_edit());

        let guest = Role::from("visiter");
        assert_eq!(guest, Role::Other("visiter".to_owned()));
        assert!(!guest.can_edit());
        assert!(!guest.is_visitor());
        assert_eq!(guest.to_string(), "visiter");
    }
}
