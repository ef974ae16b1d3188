//! Macros for declaring states.

/// Declare an enum and implement [`State`](crate::core::State) for it.
///
/// Variant names become state names; variants listed under `final:` end a
/// round.
///
/// # Example
///
/// ```
/// use mystery_number::core::State;
/// use mystery_number::state_enum;
///
/// state_enum! {
///     pub enum Round {
///         Lobby,
///         Guessing,
///         Over,
///     }
///     final: [Over]
/// }
///
/// assert_eq!(Round::Guessing.name(), "Guessing");
/// assert!(Round::Over.is_final());
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
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

            #[allow(clippy::match_like_matches_macro)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
