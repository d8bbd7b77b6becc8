// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the pipeline types.

/// Generate `Display` and `FromStr` for a fieldless enum from one name table.
///
/// `FromStr` returns the given error constructor applied to the unknown input.
///
/// ```ignore
/// crate::named_enum! {
///     OutputFormat, ConfigError::UnsupportedFormat {
///         Json => "json",
///         Lines => "lines",
///     }
/// }
/// ```
#[macro_export]
macro_rules! named_enum {
    ($enum:ty, $err:path { $( $variant:ident => $str:expr ),+ $(,)? }) => {
        impl $enum {
            /// Name used on the command line and in templates.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $str, )+
                }
            }
        }

        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum {
            type Err = $crate::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $str => Ok(Self::$variant), )+
                    other => Err($err(other.to_string())),
                }
            }
        }
    };
}
