#![allow(clippy::struct_excessive_bools)]

/// Configuration options for [`parse`].
///
/// An options value is an immutable snapshot of four independent flags,
/// chosen before parsing begins and consulted read-only at the grammar
/// branch points they affect (number literals and string delimiters).
///
/// # Examples
///
/// ```rust
/// use jsonpin::{ParseOptions, Source, parse};
///
/// let options = ParseOptions {
///     allow_single_quote_strings: true,
///     ..Default::default()
/// };
/// let source = Source::new("data.json", "'single'");
/// assert!(parse(&source, options).is_ok());
/// ```
///
/// # Default
///
/// All options default to `false`, which is strict RFC 8259 JSON.
/// [`ParseOptions::relaxed`] enables every extension.
///
/// [`parse`]: crate::parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Whether to accept the unquoted literals `Infinity`, `-Infinity` and
    /// `NaN` as numbers.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_infinity_and_nan: bool,

    /// Whether to accept an explicit `+` before the integer part of a
    /// number, as in `+5`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_explicit_plus_sign_in_mantissa: bool,

    /// Whether to accept `'...'` as an alternate string delimiter to
    /// `"..."`.
    ///
    /// Also enables the `\'` escape inside string literals.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_single_quote_strings: bool,

    /// Whether to accept a number whose integer part is empty, as in `.5`.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_number_to_start_with_dot: bool,
}

impl ParseOptions {
    /// The relaxed dialect: every extension enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpin::{ParseOptions, Source, parse};
    ///
    /// let source = Source::new("data.json", "[.5, +1, 'x', NaN]");
    /// assert!(parse(&source, ParseOptions::relaxed()).is_ok());
    /// ```
    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            allow_infinity_and_nan: true,
            allow_explicit_plus_sign_in_mantissa: true,
            allow_single_quote_strings: true,
            allow_number_to_start_with_dot: true,
        }
    }
}
