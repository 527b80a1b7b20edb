//! Sign-in roles offered by the role selector.

use serde::{Deserialize, Serialize};

/// The account type a user signs in as. Exactly one is selected at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Admin,
    Investigator,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Admin, Role::Investigator];

    /// Lower-case identifier, as used in config keys and DOM ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Investigator => "investigator",
        }
    }

    /// Capitalized name shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Investigator => "Investigator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "investigator" => Ok(Role::Investigator),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_role_is_admin() {
        assert_eq!(Role::default(), Role::Admin);
    }

    #[test]
    fn display_is_capitalized() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::Investigator.to_string(), "Investigator");
    }

    #[test]
    fn parses_lowercase_ids() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("Admin".parse::<Role>().is_err());
    }
}
