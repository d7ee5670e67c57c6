//! Macros for declaring state and event enums.

/// Generate a `State` implementation for a plain enum.
///
/// Variant names are used as state names unless a variant is given an
/// explicit `= "name"`.
///
/// # Example
///
/// ```
/// use statesmith::state_enum;
/// use statesmith::core::State;
///
/// state_enum! {
///     pub enum AccountState {
///         Open = "open",
///         Held = "held",
///         Closed = "closed",
///     }
///     final: [Closed]
/// }
///
/// assert_eq!(AccountState::Held.name(), "held");
/// assert!(AccountState::Closed.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__key_label!($variant $(, $label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Generate an `Event` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use statesmith::event_enum;
/// use statesmith::core::Event;
///
/// event_enum! {
///     pub enum AccountEvent {
///         Deposit = "deposit",
///         PlaceHold = "placeHold",
///         Close,
///     }
/// }
///
/// assert_eq!(AccountEvent::PlaceHold.name(), "placeHold");
/// assert_eq!(AccountEvent::Close.name(), "Close");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__key_label!($variant $(, $label)?)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Event::name(self))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __key_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}
