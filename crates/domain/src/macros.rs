//! Macro for implementing Display and FromStr for status enums
//!
//! Status values arrive from the remote table as free text, sometimes in
//! Portuguese and sometimes with spelling variants ("canceled", "cancelled",
//! "cancelado"). The macro gives each variant one canonical string plus any
//! number of accepted aliases.
//!
//! # Example
//!
//! ```rust
//! use agenda_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PaymentStatus {
//!     Open,
//!     Paid,
//! }
//!
//! impl_domain_status_conversions!(PaymentStatus {
//!     Open => "open" | "aberto",
//!     Paid => "paid" | "pago",
//! });
//!
//! assert_eq!("PAGO".parse::<PaymentStatus>().unwrap(), PaymentStatus::Paid);
//! assert_eq!(PaymentStatus::Paid.to_string(), "paid");
//! ```

/// Implements Display, FromStr and String conversions for status enums
///
/// This macro generates:
/// - `as_str`: the canonical lowercase representation
/// - Display trait: writes the canonical representation
/// - FromStr trait: parses case-insensitive canonical names and aliases
/// - `TryFrom<String>` / `From<Enum> for String`, so the enum can be used with
///   `#[serde(try_from = "String", into = "String")]`
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str | $alias...` - Canonical string and accepted aliases
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }

        impl TryFrom<String> for $enum_name {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$enum_name> for String {
            fn from(value: $enum_name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}
