//! Shorthand macros for raising failures through the default signal.
//!
//! - [`macro@crate::raise`] - Formats a message and unwinds with it.
//! - [`macro@crate::ensure`] - Raises a formatted failure when a condition does not hold.
//!
//! Both go through [`fail`](crate::fail), so the raised failure is packaged by
//! the current default [`Signal`](crate::Signal) and the call site recorded by
//! [`Signal::WithCaller`](crate::Signal::WithCaller) is the macro invocation.
//!
//! # Examples
//!
//! ```
//! use lazy_rail::{catch_result, ensure, raise};
//!
//! fn withdraw(balance: u64, amount: u64) -> u64 {
//!     ensure!(amount > 0, "amount must be positive");
//!     if amount > balance {
//!         raise!("insufficient funds: {} < {}", balance, amount);
//!     }
//!     balance - amount
//! }
//!
//! assert_eq!(catch_result(|| withdraw(10, 4)).unwrap(), 6);
//! let err = catch_result(|| withdraw(3, 4)).unwrap_err();
//! assert!(err.to_string().ends_with("insufficient funds: 3 < 4"));
//! ```

/// Unwinds with a formatted failure through the default signal.
///
/// Evaluates to `!`, so it can stand in any expression position.
///
/// # Examples
///
/// ```
/// use lazy_rail::{catch_result, raise};
///
/// let err = catch_result(|| -> u32 { raise!("missing key `{}`", "port") }).unwrap_err();
/// assert!(err.to_string().ends_with("missing key `port`"));
/// ```
#[macro_export]
macro_rules! raise {
    ($($arg:tt)+) => {
        $crate::fail(::std::format!($($arg)+))
    };
}

/// Raises a formatted failure unless `cond` holds.
///
/// Without a message the stringified condition is used.
///
/// # Examples
///
/// ```
/// use lazy_rail::{catch_result, ensure};
///
/// let err = catch_result(|| ensure!(1 + 1 == 3)).unwrap_err();
/// assert!(err.to_string().ends_with("condition failed: `1 + 1 == 3`"));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::fail(::std::concat!("condition failed: `", ::std::stringify!($cond), "`"));
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::raise!($($arg)+);
        }
    };
}
