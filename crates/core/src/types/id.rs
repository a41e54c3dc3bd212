//! Newtype IDs for type-safe entity references.
//!
//! Back-office records are keyed by human-readable string identifiers
//! (`#ORD-7782`, `SKU-1001`, `c1`). The `define_id!` macro wraps each in its
//! own type so an order id can never be passed where a tenant id is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `new()`, `as_str()` and `into_inner()`
/// - `Display`, `From<&str>`, `From<String>` and `AsRef<str>`
///
/// # Example
///
/// ```rust
/// # use brandhub_core::define_id;
/// define_id!(BrandId);
/// define_id!(InvoiceId);
///
/// let brand = BrandId::new("c1");
/// let invoice = InvoiceId::from("INV-1");
///
/// assert_eq!(brand.as_str(), "c1");
/// assert_eq!(invoice.to_string(), "INV-1");
/// // These are different types, so this won't compile:
/// // let _: BrandId = invoice;
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
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
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

// Define standard entity IDs
define_id!(TenantId);
define_id!(OrderId);
define_id!(ProductId);
define_id!(CustomerId);
define_id!(ShipmentId);
define_id!(WishlistEntryId);
define_id!(TrafficSampleId);
define_id!(SupplierOrderId);
define_id!(CampaignId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_value() {
        let id = OrderId::new("#ORD-7782");
        assert_eq!(id.to_string(), "#ORD-7782");
    }

    #[test]
    fn test_serde_transparent() {
        let id = TenantId::from("c2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c2\"");

        let parsed: TenantId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_into_inner() {
        let id = ProductId::from(String::from("SKU-1001"));
        assert_eq!(id.into_inner(), "SKU-1001");
    }
}
