/// Declares an enum of well-known string values that keeps unknown values.
///
/// Every listed variant maps to exactly one wire string. Any other string
/// deserializes into a hidden `_Custom` variant that holds it verbatim, so
/// `as_str()` always returns what was received.
///
/// The generated type implements `as_str`, `AsRef<str>`, `From<T>` for any
/// string-like `T`, `Display`, `Debug`, `Serialize` and `Deserialize`.
macro_rules! string_enum {
    (
        $( #[$meta:meta] )*
        $vis:vis enum $name:ident {
            $(
                $( #[$variant_meta:meta] )*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $( #[$meta] )*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $( #[$variant_meta] )*
                $variant,
            )*

            #[doc(hidden)]
            _Custom($crate::PrivOwnedStr),
        }

        impl $name {
            /// Creates a string slice from this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )*
                    Self::_Custom(s) => &s.0,
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl<T> ::std::convert::From<T> for $name
        where
            T: ::std::convert::AsRef<str> + ::std::convert::Into<::std::boxed::Box<str>>,
        {
            fn from(s: T) -> Self {
                match s.as_ref() {
                    $( $value => Self::$variant, )*
                    _ => Self::_Custom($crate::PrivOwnedStr(s.into())),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                <str as ::std::fmt::Debug>::fmt(self.as_str(), f)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = $crate::serde::deserialize_cow_str(deserializer)?;
                Ok(s.into())
            }
        }
    };
}

pub(crate) use string_enum;
