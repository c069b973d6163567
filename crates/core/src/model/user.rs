use serde::{Deserialize, Serialize};

use crate::model::UserId;

/// The signed-in learner shown in the header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Emoji or image reference rendered as the avatar.
    pub avatar: String,
}

impl User {
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            avatar: avatar.into(),
        }
    }

    /// The account the header's log-in button signs in.
    #[must_use]
    pub fn demo_learner() -> Self {
        Self::new(UserId::new(1), "یادگیرنده React", "learner@react.com", "👨‍💻")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}
