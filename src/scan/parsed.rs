/*!
# Argot: Scan Result.
*/

use crate::ScanError;
use std::collections::{
	BTreeMap,
	BTreeSet,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Scan Result.
///
/// This holds everything a scan turned up: the boolean switches that were
/// present, the values bound to options, the positional (non-option)
/// arguments, and the error that stopped things, if any.
///
/// If there is an error, the values reflect only what was bound _before_ the
/// offending token, so be sure to check [`Parsed::has_error`] (or use
/// [`Parsed::into_result`]) before trusting anything else.
pub struct Parsed {
	/// # Present Switches.
	pub(super) bools: BTreeSet<String>,

	/// # Bound Values.
	pub(super) strings: BTreeMap<String, String>,

	/// # Positional Arguments.
	pub(super) args: Vec<String>,

	/// # Error.
	pub(super) error: Option<ScanError>,
}

impl Parsed {
	#[must_use]
	/// # Get Boolean.
	///
	/// Returns `true` if the switch registered under `key` was present.
	pub fn get_bool(&self, key: &str) -> bool { self.bools.contains(key) }

	#[must_use]
	/// # Get String.
	///
	/// Return the value bound to the option registered under `key`, or an
	/// empty string if there isn't one.
	pub fn get_string(&self, key: &str) -> &str {
		self.strings.get(key).map_or("", String::as_str)
	}

	#[must_use]
	/// # Positional Arguments.
	///
	/// These are returned in the order they were encountered.
	pub fn args(&self) -> &[String] { &self.args }

	#[must_use]
	/// # Has Error?
	pub const fn has_error(&self) -> bool { self.error.is_some() }

	#[must_use]
	/// # Error.
	pub const fn error(&self) -> Option<&ScanError> { self.error.as_ref() }

	/// # Into Result.
	///
	/// Convert the scan into a `Result` for `?` convenience.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Registry, ScanError};
	///
	/// let mut reg = Registry::new();
	/// let parsed = reg.parse(["prog", "--nope"]).clone();
	/// assert_eq!(
	///     parsed.into_result(),
	///     Err(ScanError::UnknownOption("--nope".to_owned())),
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// Returns the scan error, if any.
	pub fn into_result(self) -> Result<Self, ScanError> {
		match self.error {
			Some(e) => Err(e),
			None => Ok(self),
		}
	}
}

impl Parsed {
	/// # Forget Key.
	///
	/// Drop any value bound to `key`.
	pub(crate) fn forget(&mut self, key: &str) {
		self.bools.remove(key);
		self.strings.remove(key);
	}
}
