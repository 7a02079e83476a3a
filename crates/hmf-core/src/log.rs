/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Stand-ins for the `log` macros when the `log` feature is off
//!
//! Callers always write `hmf_core::log::trace!(...)`, with the feature on
//! the path resolves to the `log` crate itself.
//!
//! The arguments are still type checked (inside a dead branch) so values
//! that are only logged do not trip `unused` lints.

// #[macro_export] puts the macro in the crate root,
// the re-export below gives it a namespaced path.
pub use crate::{
    __hmf_debug as debug, __hmf_error as error, __hmf_info as info, __hmf_trace as trace,
    __hmf_warn as warn
};

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_swallow {
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_error {
    ($($arg:tt)+) => {
        $crate::__hmf_swallow!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_warn {
    ($($arg:tt)+) => {
        $crate::__hmf_swallow!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_info {
    ($($arg:tt)+) => {
        $crate::__hmf_swallow!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_debug {
    ($($arg:tt)+) => {
        $crate::__hmf_swallow!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hmf_trace {
    ($($arg:tt)+) => {
        $crate::__hmf_swallow!($($arg)+)
    };
}
