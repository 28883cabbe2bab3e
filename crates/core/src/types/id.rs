//! Newtype IDs for type-safe record references.
//!
//! Store records are keyed either by a numeric ID (staff accounts) or by a
//! printed code such as `WM001` or `CART-247`. Use `define_id!` for the former
//! and `define_code!` for the latter so codes from different record types
//! can't be mixed up.

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use retail_ops_core::define_id;
/// define_id!(ShiftId);
/// define_id!(RegisterId);
///
/// let shift = ShiftId::new(1);
/// let register = RegisterId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ShiftId = register;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Macro to define a type-safe printed record code.
///
/// Creates a newtype wrapper around `String` with `Display`, `AsRef<str>`,
/// transparent serde, and a case-insensitive `matches` helper used when
/// resolving codes taken from URLs.
///
/// # Example
///
/// ```rust
/// # use retail_ops_core::define_code;
/// define_code!(AisleCode);
///
/// let aisle = AisleCode::new("A-07");
/// assert!(aisle.matches("a-07"));
/// assert_eq!(aisle.to_string(), "A-07");
/// ```
#[macro_export]
macro_rules! define_code {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a code from its printed form.
            #[must_use]
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether `candidate` names this code, ignoring ASCII case.
            #[must_use]
            pub fn matches(&self, candidate: &str) -> bool {
                self.0.eq_ignore_ascii_case(candidate.trim())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self(code.to_owned())
            }
        }
    };
}

// Numeric record IDs
define_id!(StaffUserId);

// Printed record codes
define_code!(Sku);
define_code!(CartCode);
define_code!(TicketCode);
define_code!(TransactionCode);
define_code!(CustomerCode);
define_code!(ProductCode);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_user_id_roundtrips_through_i32() {
        let id = StaffUserId::from(4);
        assert_eq!(i32::from(id), 4);
        assert_eq!(id.to_string(), "4");
    }

    #[test]
    fn test_staff_user_id_from_str() {
        assert_eq!("3".parse::<StaffUserId>().unwrap(), StaffUserId::new(3));
        assert!("three".parse::<StaffUserId>().is_err());
    }

    #[test]
    fn test_code_matches_ignores_case() {
        let code = CartCode::new("CART-249");
        assert!(code.matches("cart-249"));
        assert!(code.matches(" CART-249 "));
        assert!(!code.matches("CART-24"));
    }

    #[test]
    fn test_code_serializes_transparently() {
        let sku = Sku::new("WM003");
        assert_eq!(serde_json::to_string(&sku).unwrap(), "\"WM003\"");
    }
}
