//! Helper macro for declaring port error enums with `impl Into` constructors.
//!
//! Variant fields may carry attributes (usually `///` docs) and every
//! generated constructor gets a doc line, so port errors declared through the
//! macro still satisfy the workspace `missing_docs = "deny"` lint.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = "Construct the `" $variant "` variant."]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $( $(#[$field_meta])* $field : $ty ),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Checks generated constructors and messages.
    define_port_error! {
        pub enum SamplePortError {
            Unavailable => "service unavailable",
            Status {
                /// HTTP status code.
                status: u16,
                /// Body preview.
                message: String,
            } => "status {status}: {message}",
            Timeout { message: String } => "timed out: {message}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::unavailable(), SamplePortError::Unavailable);
    }

    #[test]
    fn constructors_accept_borrowed_strings() {
        let err = SamplePortError::timeout("after 10s");
        assert_eq!(err.to_string(), "timed out: after 10s");
    }

    #[test]
    fn documented_fields_build_like_bare_ones() {
        let err = SamplePortError::status(404_u16, String::from("missing"));
        assert_eq!(
            err,
            SamplePortError::Status {
                status: 404,
                message: "missing".to_owned(),
            }
        );
    }

    #[test]
    fn constructors_keep_field_order() {
        let err = SamplePortError::status(503_u16, "down");
        assert_eq!(err.to_string(), "status 503: down");
    }
}
