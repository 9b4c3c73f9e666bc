//! Custom actions for the User actor.

/// Role changes. Both return whether the user is an admin afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    PromoteToAdmin,
    RevokeAdmin,
}
