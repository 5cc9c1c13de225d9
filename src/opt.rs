/*!
# Argot: Option Definitions.
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Option Definition.
///
/// This holds the particulars of a single registered option. Instances are
/// created by [`Registry::register`](crate::Registry::register), which
/// guarantees all the invariants, and are immutable thereafter.
///
/// Every definition has at least one of a short form (`-x`) or long form
/// (`--xxx`), and is either a boolean switch or a value-bearing option. Only
/// the latter may be required.
pub struct OptionDef {
	/// # Canonical Key.
	pub(crate) key: String,

	/// # Long Form (Dashless).
	pub(crate) long: Option<String>,

	/// # Short Form (Dashless).
	pub(crate) short: Option<char>,

	/// # Boolean?
	pub(crate) boolean: bool,

	/// # Required?
	pub(crate) required: bool,

	/// # Usage Text.
	pub(crate) usage: String,
}

impl fmt::Display for OptionDef {
	/// # Usage Line.
	///
	/// This writes something like `-o --output REQUIRED <value> Output file.`,
	/// sans line break.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut parts: Vec<String> = Vec::with_capacity(5);
		if let Some(s) = self.short { parts.push(format!("-{s}")); }
		if let Some(l) = self.long.as_deref() { parts.push(format!("--{l}")); }
		if self.required { parts.push("REQUIRED".to_owned()); }
		if ! self.boolean { parts.push("<value>".to_owned()); }
		if ! self.usage.is_empty() { parts.push(self.usage.clone()); }

		f.write_str(&parts.join(" "))
	}
}

impl OptionDef {
	#[must_use]
	/// # Key.
	pub fn key(&self) -> &str { &self.key }

	#[must_use]
	/// # Long Form.
	///
	/// This is returned without the leading dashes.
	pub fn long(&self) -> Option<&str> { self.long.as_deref() }

	#[must_use]
	/// # Short Form.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Is Boolean?
	pub const fn is_boolean(&self) -> bool { self.boolean }

	#[must_use]
	/// # Is Required?
	pub const fn is_required(&self) -> bool { self.required }

	#[must_use]
	/// # Usage Text.
	pub fn usage(&self) -> &str { &self.usage }

	#[must_use]
	/// # Descriptive Form(s).
	///
	/// Return the most descriptive way to refer to this option on the command
	/// line: `-s or --long` if both forms exist, otherwise whichever one does.
	pub fn forms(&self) -> String {
		match (self.short, self.long.as_deref()) {
			(Some(s), Some(l)) => format!("-{s} or --{l}"),
			(Some(s), None) => format!("-{s}"),
			(None, Some(l)) => format!("--{l}"),
			// Registration won't allow this, but the key is better than
			// nothing.
			(None, None) => self.key.clone(),
		}
	}
}



/// # Strip Dashes.
///
/// Remove the leading `--` or `-` from an argument, provided something is
/// left over afterward. (A lone `-` or `--` is returned as `-`.)
pub(crate) fn strip_dashes(raw: &str) -> &str {
	if 2 < raw.len() && raw.starts_with("--") { &raw[2..] }
	else if 1 < raw.len() && raw.starts_with('-') { &raw[1..] }
	else { raw }
}
