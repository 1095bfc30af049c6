//! Macros for reducing boilerplate when defining screen records
//!
//! These macros generate the repetitive trait implementations needed
//! for each record type shown in a dashboard table.

/// Complete macro to create a record type with automatic trait implementations
///
/// The first field block lists the indexed fields: they are exposed through
/// `Record::field_value` and may be filtered and sorted on. The optional
/// second block holds fields that are stored but not indexed (image lists,
/// nested variants...); they are initialized with `Default` by `new`.
///
/// Validation is left to a hand-written `Validate` impl.
///
/// # Example
///
/// ```rust,ignore
/// use catalog::prelude::*;
///
/// impl_record!(
///     Faq,
///     "faq",
///     "faqs",
///     search: ["question", "answer"],
///     {
///         question: String,
///         answer: String,
///     }
/// );
///
/// let faq = Faq::new("What is JSX?".to_string(), "A syntax extension.".to_string());
/// assert_eq!(Faq::indexed_fields(), &["question", "answer"]);
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        search: [ $( $search_field:expr ),* $(,)? ],
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
        $(,
        {
            $( $(#[$extra_meta:meta])* $extra_field:ident : $extra_type:ty ),* $(,)?
        }
        )?
        $(,)?
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $type {
            /// Identifier within the owning collection
            #[serde(default)]
            pub id: $crate::core::entity::RecordId,
            $( $(#[$field_meta])* pub $field : $field_type, )*
            $( $( $(#[$extra_meta])* pub $extra_field : $extra_type, )* )?
        }

        impl $crate::core::entity::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::RecordId {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::entity::RecordId) {
                self.id = id;
            }

            fn search_fields() -> &'static [&'static str] {
                &[ $( $search_field ),* ]
            }

            fn indexed_fields() -> &'static [&'static str] {
                &[ $( stringify!($field) ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                use $crate::core::field::ToFieldValue;

                match field {
                    "id" => Some(self.id.to_field_value()),
                    $( stringify!($field) => Some(self.$field.to_field_value()), )*
                    _ => None,
                }
            }
        }

        impl $type {
            /// Create a new, not yet stored record (its id is assigned by the collection)
            #[allow(clippy::too_many_arguments)]
            pub fn new( $( $field: $field_type ),* ) -> Self {
                Self {
                    id: $crate::core::entity::RecordId::default(),
                    $( $field, )*
                    $( $( $extra_field: ::std::default::Default::default(), )* )?
                }
            }

            /// Set the id; used when building seeded datasets
            pub fn with_id(mut self, id: impl Into<$crate::core::entity::RecordId>) -> Self {
                self.id = id.into();
                self
            }
        }
    };
}
