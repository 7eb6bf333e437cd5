//! Macros for ergonomic configuration construction.

/// Build a [`Config`](crate::core::Config) from a declarative listing.
///
/// Every listed state is declared, including ones without transitions.
///
/// # Example
///
/// ```
/// use undofsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: off,
///     off { toggle => on },
///     on { toggle => off, unplug => dead },
///     dead {},
/// };
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.destination("on", "unplug"), Some("dead"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident
        $(,
            $state:ident {
                $($event:ident => $target:ident),* $(,)?
            }
        )* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut config = $crate::core::Config::new(stringify!($initial));
        $(
            config = config.with_state(
                stringify!($state),
                $crate::core::StateConfig::new()
                    $(.on(stringify!($event), stringify!($target)))*,
            );
        )*
        config
    }};
}
