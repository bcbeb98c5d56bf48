//! Access predicates shared by the use cases.
//!
//! Each predicate takes the optional caller so that anonymous requests and
//! authenticated ones go through the same checks.

use super::value_objects::UserId;

/// The authenticated caller, as decoded from an access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub is_staff: bool,
}

impl Principal {
    pub fn new(user_id: UserId, is_staff: bool) -> Self {
        Self { user_id, is_staff }
    }

    pub fn customer(user_id: UserId) -> Self {
        Self::new(user_id, false)
    }

    pub fn staff(user_id: UserId) -> Self {
        Self::new(user_id, true)
    }
}

pub fn is_authenticated(principal: Option<&Principal>) -> bool {
    principal.is_some()
}

pub fn is_staff(principal: Option<&Principal>) -> bool {
    principal.is_some_and(|p| p.is_staff)
}

pub fn is_owner(principal: Option<&Principal>, owner: &UserId) -> bool {
    principal.is_some_and(|p| &p.user_id == owner)
}

pub fn is_owner_or_staff(principal: Option<&Principal>, owner: &UserId) -> bool {
    is_owner(principal, owner) || is_staff(principal)
}

/// Resources without an owner are open to anyone holding their identifier.
pub fn may_access(principal: Option<&Principal>, owner: Option<&UserId>) -> bool {
    match owner {
        None => true,
        Some(owner) => is_owner_or_staff(principal, owner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_anonymous_as_unauthenticated() {
        assert!(!is_authenticated(None));
        assert!(!is_staff(None));
    }

    #[test]
    fn should_recognize_staff() {
        let admin = Principal::staff(UserId::generate());
        let customer = Principal::customer(UserId::generate());

        assert!(is_staff(Some(&admin)));
        assert!(!is_staff(Some(&customer)));
    }

    #[test]
    fn should_grant_owner_access_to_owned_resource() {
        let owner = UserId::generate();
        let principal = Principal::customer(owner);

        assert!(is_owner(Some(&principal), &owner));
        assert!(may_access(Some(&principal), Some(&owner)));
    }

    #[test]
    fn should_deny_other_user_access_to_owned_resource() {
        let owner = UserId::generate();
        let intruder = Principal::customer(UserId::generate());

        assert!(!may_access(Some(&intruder), Some(&owner)));
        assert!(!may_access(None, Some(&owner)));
    }

    #[test]
    fn should_let_staff_access_any_owned_resource() {
        let owner = UserId::generate();
        let admin = Principal::staff(UserId::generate());

        assert!(is_owner_or_staff(Some(&admin), &owner));
    }

    #[test]
    fn should_allow_anyone_on_unowned_resource() {
        assert!(may_access(None, None));
        assert!(may_access(Some(&Principal::customer(UserId::generate())), None));
    }
}
