#[cfg(feature = "log")]
pub use log::{debug, error, info, trace, warn};

#[cfg(all(feature = "defmt", not(feature = "log")))]
pub use defmt::{debug, error, info, trace, warn};

#[cfg(not(any(feature = "log", feature = "defmt")))]
#[allow(unused_imports)]
pub(crate) use silent::{debug, error, info, trace, warn};

/// For builds without a logging backend. The macros still need to exist so call sites don't need a cfg.
///
/// Always compiled so the default build catches name clashes here too.
#[allow(unused_imports, unused_macros)]
mod silent {
    macro_rules! discard {
        ($($arg:tt)*) => {{}};
    }

    pub(crate) use {
        discard as debug, discard as error, discard as info, discard as trace, discard as warn,
    };
}
