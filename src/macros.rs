/// Debug assertion for a documented precondition, active with the `contracts` feature.
///
/// The recoverable check that follows each `contract!` runs regardless.
macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(feature = "contracts") {
            debug_assert!($cond, $($arg)+);
        }
    };
}
