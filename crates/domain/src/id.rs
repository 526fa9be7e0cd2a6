macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(derive_more::Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(uuid::Uuid);

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            #[must_use]
            pub fn nil() -> Self {
                Self(uuid::Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(uuid::Uuid::from_bytes(value.to_be_bytes()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use uuid_id;

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    uuid_id!(TestID);

    #[test]
    fn test_id_nil() {
        assert!(TestID::nil().is_nil());
        assert_eq!(TestID::nil(), TestID::default());
    }

    #[test]
    fn test_id_new_is_unique() {
        assert!(!TestID::new().is_nil());
        assert_ne!(TestID::new(), TestID::new());
    }

    #[test]
    fn test_id_from_u128() {
        assert_eq!(
            TestID::from(1).to_string(),
            "00000000-0000-0000-0000-000000000001"
        );
    }
}
