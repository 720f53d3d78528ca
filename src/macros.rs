//! Macros for declaring state enums.

/// Declare a state enum and generate its `State` implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug` and the serde traits, implements `Display` with the variant name
/// and exposes every variant in declaration order as `VARIANTS`.
///
/// # Example
///
/// ```
/// use traflit::core::State;
/// use traflit::state_enum;
///
/// state_enum! {
///     pub enum Barrier {
///         Raised,
///         Lowering,
///         Lowered,
///         Broken,
///     }
///     final: [Broken]
/// }
///
/// assert_eq!(Barrier::Lowering.name(), "Lowering");
/// assert!(Barrier::Broken.is_final());
/// assert_eq!(Barrier::VARIANTS.len(), 4);
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            $(
                fn is_final(&self) -> bool {
                    matches!(self, $(Self::$final)|*)
                }
            )?
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::State::name(self))
            }
        }
    };
}
