/*!
# Argot: Token Classification.
*/

use crate::opt::strip_dashes;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Token Kind.
///
/// This is the lexical shape of a single raw argument, decided without any
/// knowledge of what's been registered. The borrowed bits are always
/// dashless.
///
/// Shapes are tested most-specific first, so `--key=val` is `Equals` rather
/// than `Long`, and `-k=val` is `Equals` rather than `Short`.
pub(super) enum Token<'a> {
	/// # `-k=val` or `--key=val`.
	Equals {
		/// # Two Dashes?
		long: bool,

		/// # Key (Left of the First `=`).
		key: &'a str,

		/// # Value (Right of the First `=`).
		value: &'a str,
	},

	/// # `--key`.
	Long(&'a str),

	/// # `-k`, `-abc`, or `-kval`.
	Short(&'a str),

	/// # Everything Else.
	Positional,
}

impl<'a> From<&'a str> for Token<'a> {
	fn from(raw: &'a str) -> Self {
		if ! is_keylike(raw) || raw == "--" { return Self::Positional; }

		let long = 2 < raw.len() && raw.starts_with("--");

		// An equals sign only counts if there's at least one character
		// between it and the leading dash.
		if raw.rfind('=').is_some_and(|idx| 2 <= idx) {
			if let Some((key, value)) = strip_dashes(raw).split_once('=') {
				return Self::Equals { long, key, value };
			}
		}

		if long { Self::Long(strip_dashes(raw)) }
		else { Self::Short(strip_dashes(raw)) }
	}
}



/// # Key-Like?
///
/// Returns `true` for anything starting with a dash that has something after
/// it. Such values are never eligible to be an option's lookahead value.
pub(super) fn is_keylike(raw: &str) -> bool {
	1 < raw.len() && raw.starts_with('-')
}
