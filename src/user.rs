use std::fmt;

use serde::{Deserialize, Serialize};

/// A git identity kept in the store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Git author name (user.name)
    pub name: String,
    /// Git author email (user.email), unique within a store
    pub email: String,
    /// Private key handed to the SSH agent on switch
    #[serde(rename = "ssh_key_file_path")]
    pub ssh_key_path: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        ssh_key_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ssh_key_path: ssh_key_path.into(),
        }
    }
}

/// Summary line shown in selection menus
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t<{}> ({})", self.name, self.email, self.ssh_key_path)
    }
}
