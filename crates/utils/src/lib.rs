//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, capitalising element symbols or displaying optional values
//! are useful everywhere in the toolkit.

// standard library
use std::fmt::Display;

// Alias for the format! macro
pub use std::format as f;

/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use nucdb_utils::StringExt;
    /// assert_eq!("se".capitalise(), "Se".to_string());
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }
}

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be
    /// the value contained within `Some()` or "none" for the `None` variant.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use nucdb_utils::OptionExt;
    /// let x: Option<f64> = Some(2.5);
    /// assert_eq!(x.display(), "2.5");
    ///
    /// let x: Option<f64> = None;
    /// assert_eq!(x.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
