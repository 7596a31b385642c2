use serde::{Deserialize, Serialize};

use super::hangout::{Category, Hangout};
use super::user::{BappyUser, Personality};

/// A user's aggregate profile view: identity plus the three hangout lists.
///
/// Assembled by DTO mapping; the lists start empty and are filled by the
/// per-list fetches on the profile screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub user: BappyUser,
    pub joined_hangouts: Vec<Hangout>,
    pub made_hangouts: Vec<Hangout>,
    pub liked_hangouts: Vec<Hangout>,
}

impl Profile {
    /// A profile for the given user with empty hangout lists.
    pub fn new(user: BappyUser) -> Self {
        Self {
            user,
            joined_hangouts: Vec::new(),
            made_hangouts: Vec::new(),
            liked_hangouts: Vec::new(),
        }
    }
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub affiliation: Option<String>,
    pub introduce: Option<String>,
    pub languages: Option<Vec<String>>,
    pub personalities: Option<Vec<Personality>>,
    pub interests: Option<Vec<Category>>,
    /// Replacement profile image, raw bytes.
    pub image: Option<Vec<u8>>,
}

/// Push-notification toggles shown on the profile settings screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationSetting {
    /// Updates about hangouts the user joined or made.
    pub my_hangout: bool,
    /// Announcements of new hangouts nearby.
    pub new_hangout: bool,
}

impl Default for NotificationSetting {
    fn default() -> Self {
        Self {
            my_hangout: true,
            new_hangout: true,
        }
    }
}
