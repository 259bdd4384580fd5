//! Macros for declaring state and event identifier enums.

/// Generate a `State` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use rewind_fsm::state_enum;
/// use rewind_fsm::core::State;
///
/// state_enum! {
///     pub enum Connection {
///         Disconnected,
///         Connecting,
///         Connected,
///     }
/// }
///
/// assert_eq!(Connection::Connecting.name(), "Connecting");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }
    };
}

/// Generate an `Event` implementation for a plain enum.
///
/// # Example
///
/// ```
/// use rewind_fsm::event_enum;
/// use rewind_fsm::core::Event;
///
/// event_enum! {
///     pub enum Signal {
///         Dial,
///         HangUp,
///     }
/// }
///
/// assert_eq!(Signal::HangUp.name(), "HangUp");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
