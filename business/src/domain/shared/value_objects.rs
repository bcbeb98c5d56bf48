use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a registered user.
/// Used to scope carts, orders, reviews and notifications to their owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_uuid() {
        let raw = Uuid::new_v4();
        let user_id = UserId::new(raw);
        assert_eq!(user_id.as_uuid(), raw);
    }

    #[test]
    fn should_display_as_hyphenated_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(UserId::from(raw).to_string(), raw.to_string());
    }

    #[test]
    fn should_parse_from_str() {
        let raw = Uuid::new_v4();
        let parsed: UserId = raw.to_string().parse().unwrap();
        assert_eq!(parsed, UserId::new(raw));
    }

    #[test]
    fn should_reject_malformed_id() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }

    #[test]
    fn should_generate_distinct_ids() {
        assert_ne!(UserId::generate(), UserId::generate());
    }
}
