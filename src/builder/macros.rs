//! Macros for ergonomic state declarations.

/// Generate a symbolic state enum that converts to and from stored values.
///
/// Each variant is paired with the value stored in the state column. The
/// generated type converts into [`StateValue`](crate::StateValue), so it can be
/// passed anywhere the builders expect a state, and parses back with
/// [`FromStr`](std::str::FromStr).
///
/// # Example
///
/// ```
/// use statewise::{state_enum, StateValue};
///
/// state_enum! {
///     pub enum Phase {
///         NeedsAttention => "needs_attention",
///         Read => "read",
///         Closed => "closed",
///     }
/// }
///
/// let value: StateValue = Phase::Read.into();
/// assert_eq!(value, "read");
/// assert_eq!(value.parse::<Phase>(), Ok(Phase::Read));
/// assert_eq!(Phase::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The value stored in the state column.
            #[allow(dead_code)]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),*
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::StateValue {
            fn from(state: $name) -> Self {
                $crate::StateValue::new(state.as_str())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownState;

            fn from_str(value: &str) -> ::core::result::Result<Self, Self::Err> {
                match value {
                    $($value => Ok(Self::$variant),)*
                    other => Err($crate::UnknownState(other.to_string())),
                }
            }
        }
    };
}
