//! Macros for ergonomic machine construction.

/// Generate a State trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use dfsm::core::State;
/// use dfsm::state_enum;
///
/// state_enum! {
///     pub enum Remainder {
///         Zero,
///         One,
///         Two,
///     }
/// }
///
/// assert_eq!(Remainder::Two.name(), "Two");
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
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
