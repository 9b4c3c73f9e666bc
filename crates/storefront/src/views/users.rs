use std::fmt::Display;

use crate::model::User;

pub const NO_USERS: &str = "No users available.";

/// A user's profile; admins get an edit button.
#[derive(Debug, Clone)]
pub struct UserAccount {
    user: User,
}

impl UserAccount {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn can_edit(&self) -> bool {
        self.user.is_admin
    }
}

impl Display for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "User Profile\nName: {}", self.user.name)?;
        if self.can_edit() {
            f.write_str("\n[Edit]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct UserList {
    users: Vec<User>,
}

impl UserList {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn links(&self) -> Vec<String> {
        self.users.iter().map(|u| format!("/users/{}", u.id)).collect()
    }
}

impl Display for UserList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.users.is_empty() {
            return f.write_str(NO_USERS);
        }
        let lines: Vec<String> = self
            .users
            .iter()
            .zip(self.links())
            .map(|(user, link)| format!("- {} ({link})", user.name))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

/// The greeting heading, or a login button when nobody is signed in.
#[derive(Debug, Clone, Default)]
pub struct Greet {
    name: Option<String>,
}

impl Greet {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}

impl Display for Greet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Hello {name}"),
            None => f.write_str("[Login]"),
        }
    }
}
