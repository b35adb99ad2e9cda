//! Closed variant tags shared by every section.

/// Declares a closed variant enum for one section.
///
/// The generated type parses from its kebab-case tag, rejects anything else
/// with [`crate::ConfigError::InvalidVariant`], and (de)serializes as that
/// tag. Layout mappings live next to each section as exhaustive `match`es.
macro_rules! closed_variant {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $section:literal default $default:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $tag:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Section name used in error messages.
            pub const SECTION: &'static str = $section;

            /// The kebab-case tag for this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($tag => Ok($name::$variant),)+
                    other => Err($crate::ConfigError::InvalidVariant {
                        section: $section,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::ConfigError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use closed_variant;
