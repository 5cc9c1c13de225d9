/*!
# Argot: Errors.

Registration and scanning fail in different ways, and at different times,
so each gets its own enum.
*/



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Registration Error.
///
/// This is returned by [`Registry::register`](crate::Registry::register) and
/// friends. A failed registration never leaves anything behind.
pub enum RegisterError {
	#[error("An option can't be both boolean and required: {0}")]
	/// # Boolean and Required.
	BooleanRequiredConflict(String),

	#[error("An option must contain either a long or short key (or both): {0}")]
	/// # No Short or Long Form.
	NoKeyProvided(String),

	#[error("A short option can be no longer than one character: {0}")]
	/// # Short Form Too Long.
	ShortFormTooLong(String),

	#[error("A long option must be longer than one character: {0}")]
	/// # Long Form Too Short.
	LongFormTooShort(String),

	#[error("An option was already registered with key: {0}")]
	/// # Duplicate Key.
	DuplicateKey(String),

	#[error("An option was already registered with short key: {0}")]
	/// # Duplicate Short Form.
	DuplicateShortForm(char),

	#[error("An option was already registered with long key: {0}")]
	/// # Duplicate Long Form.
	DuplicateLongForm(String),
}

impl RegisterError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a generic description of the error, sans details.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::BooleanRequiredConflict(_) => "Boolean and required.",
			Self::NoKeyProvided(_) => "Missing short and long forms.",
			Self::ShortFormTooLong(_) => "Short form too long.",
			Self::LongFormTooShort(_) => "Long form too short.",
			Self::DuplicateKey(_) => "Duplicate key.",
			Self::DuplicateShortForm(_) => "Duplicate short form.",
			Self::DuplicateLongForm(_) => "Duplicate long form.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
/// # Scan Error.
///
/// Scanning halts at the first problem; this is it.
pub enum ScanError {
	#[error("No such option: {0}")]
	/// # Unknown Option.
	UnknownOption(String),

	#[error("Boolean options can't be passed values: {0}")]
	/// # Value Passed to a Boolean.
	BooleanWithValue(String),

	#[error("Missing value for option: {0}")]
	/// # Missing Value.
	MissingValue(String),

	#[error("Combined opts can't be non-boolean: {0}")]
	/// # Non-Boolean in a Combined Group.
	CombinedNonBoolean(char),

	#[error("Required option(s) not provided: {}", .0.join(", "))]
	/// # Missing Required Option(s).
	///
	/// Each entry is the most descriptive form available for the option, e.g.
	/// `-o or --output`.
	MissingRequired(Vec<String>),
}

impl ScanError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a generic description of the error, sans details.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::UnknownOption(_) => "No such option.",
			Self::BooleanWithValue(_) => "Boolean options can't be passed values.",
			Self::MissingValue(_) => "Missing value.",
			Self::CombinedNonBoolean(_) => "Combined opts can't be non-boolean.",
			Self::MissingRequired(_) => "Required option(s) not provided.",
		}
	}
}
