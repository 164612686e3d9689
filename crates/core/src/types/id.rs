//! Newtype IDs for entity references.
//!
//! Each entity gets its own ID type via `define_id!`, so an ID for one kind
//! of thing cannot be handed to code expecting another.

/// Defines a string-backed ID newtype.
///
/// The generated type serializes as a bare string (`#[serde(transparent)]`),
/// derives `Debug`, `Clone`, `PartialEq`, `Eq`, and `Hash`, and comes with
/// `new()`, `as_str()`, `into_inner()`, `Display`, `AsRef<str>`, and `From`
/// conversions from `&str` and `String`.
///
/// # Example
///
/// ```rust
/// # use thrift_haven_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let product = ProductId::new("denim-jacket");
/// let order = OrderId::new("ord-1001");
///
/// // A ProductId is not an OrderId; the line below would not compile.
/// // let _: ProductId = order;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
