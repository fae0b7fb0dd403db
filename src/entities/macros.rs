//! Macro for reducing boilerplate when defining records
//!
//! Every record shares the same identity, ownership and timestamp fields and
//! the same `Entity` implementation. `impl_record!` injects those and leaves
//! the entity-specific fields to the caller.

/// Create a record struct with automatic `Entity` implementation
///
/// The generated struct serializes with camelCase keys and exposes its
/// identifier as `_id`. Attributes written before the type name and on the
/// fields (docs, `#[serde(...)]`) are passed through unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use bizdesk::prelude::*;
///
/// impl_record!(
///     Testimonial,
///     "testimonial",
///     "testimonials",
///     {
///         project: String,
///         client: String,
///         feedback: String,
///     }
/// );
///
/// let testimonial = Testimonial::new(
///     "user-1",
///     "Website redesign".to_string(),
///     "Acme".to_string(),
///     "Delivered on time".to_string(),
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$struct_meta:meta])*
        $type:ident,
        $singular:expr,
        $plural:expr,
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        $(#[$struct_meta])*
        pub struct $type {
            /// Identifier assigned when the record is created
            #[serde(rename = "_id")]
            pub id: ::uuid::Uuid,

            /// Identifier of the owning user
            pub user_id: String,

            /// When this record was created
            pub created_at: ::chrono::DateTime<::chrono::Utc>,

            /// When this record was last updated
            pub updated_at: ::chrono::DateTime<::chrono::Utc>,

            $( $(#[$field_meta])* pub $field : $field_type ),*
        }

        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn owner_id(&self) -> &str {
                &self.user_id
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.updated_at
            }

            fn touch(&mut self) {
                self.updated_at = ::chrono::Utc::now();
            }
        }

        impl $type {
            /// Create a new record owned by `user_id`
            #[allow(clippy::too_many_arguments)]
            pub fn new(
                user_id: impl Into<String>,
                $( $field: $field_type ),*
            ) -> Self {
                let now = ::chrono::Utc::now();
                Self {
                    id: ::uuid::Uuid::new_v4(),
                    user_id: user_id.into(),
                    created_at: now,
                    updated_at: now,
                    $( $field ),*
                }
            }
        }
    };
}
