/*!
# Argot: Option Registry.
*/

use crate::{
	opt::strip_dashes,
	OptionDef,
	Parsed,
	RegisterError,
	Scanner,
};
use std::{
	collections::{
		BTreeMap,
		BTreeSet,
	},
	fmt,
};
use tracing::debug;



#[derive(Debug, Clone, Default)]
/// # Option Registry.
///
/// `Registry` holds the options your program understands, indexed by key,
/// short form, and long form, along with the result of the most recent
/// [`Registry::parse`].
///
/// Options are declared upfront, either one at a time via
/// [`Registry::register`] or builder-style via [`Registry::with_switch`],
/// [`Registry::with_option`], and their plural counterparts. Each
/// registration is all-or-nothing: if it fails, the registry is left exactly
/// as it was.
///
/// ## Threads
///
/// There is no internal synchronization. A registry is meant to be built and
/// parsed once, from one place; if you must share one between threads, wrap
/// it in a lock of your own choosing.
///
/// ## Examples
///
/// ```
/// use argot::Registry;
///
/// let mut reg = Registry::default()
///     .with_switch("verbose", "--verbose", "-v", "Be chatty.").unwrap()
///     .with_option("output", "--output", "-o", true, "Output file.").unwrap();
///
/// let parsed = reg.parse(["prog", "-v", "--output=out.txt", "in.txt"]);
/// assert!(! parsed.has_error());
/// assert!(parsed.get_bool("verbose"));
/// assert_eq!(parsed.get_string("output"), "out.txt");
/// assert_eq!(parsed.args(), ["in.txt"]);
/// ```
pub struct Registry {
	/// # Definitions by Key.
	opts: BTreeMap<String, OptionDef>,

	/// # Keys by Short Form.
	short: BTreeMap<char, String>,

	/// # Keys by Long Form.
	long: BTreeMap<String, String>,

	/// # Required Keys.
	required: BTreeSet<String>,

	/// # Last Scan Result.
	parsed: Parsed,
}

impl fmt::Display for Registry {
	/// # Usage Text.
	///
	/// One line per option.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for opt in self.opts.values() { writeln!(f, "{opt}")?; }
		Ok(())
	}
}

impl Registry {
	#[must_use]
	/// # New.
	///
	/// This is equivalent to [`Registry::default`].
	pub fn new() -> Self { Self::default() }

	/// # Register Option.
	///
	/// Add an option to the registry. `long` and `short` may be passed with or
	/// without their leading dashes; pass an empty string for whichever form
	/// you don't want.
	///
	/// ## Examples
	///
	/// ```
	/// use argot::{Registry, RegisterError};
	///
	/// let mut reg = Registry::new();
	/// assert!(reg.register("help", "--help", "-h", true, false, "Print help.").is_ok());
	///
	/// // Short forms have to be unique.
	/// assert_eq!(
	///     reg.register("host", "host", "h", false, false, "Hostname."),
	///     Err(RegisterError::DuplicateShortForm('h')),
	/// );
	/// ```
	///
	/// ## Errors
	///
	/// The following are checked, in order:
	/// * Options cannot be both boolean and required;
	/// * At least one of `long` or `short` must be provided;
	/// * A short form must be exactly one character;
	/// * A long form must be at least two characters;
	/// * The key, short form, and long form must not already be registered;
	pub fn register(
		&mut self,
		key: &str,
		long: &str,
		short: &str,
		boolean: bool,
		required: bool,
		usage: &str,
	) -> Result<(), RegisterError> {
		let long = strip_dashes(long);
		let short = strip_dashes(short);

		if boolean && required {
			return Err(RegisterError::BooleanRequiredConflict(key.to_owned()));
		}
		if long.is_empty() && short.is_empty() {
			return Err(RegisterError::NoKeyProvided(key.to_owned()));
		}

		if short.chars().nth(1).is_some() {
			return Err(RegisterError::ShortFormTooLong(short.to_owned()));
		}
		let short = short.chars().next();

		let long = (! long.is_empty()).then_some(long);
		if let Some(l) = long {
			if l.chars().nth(1).is_none() {
				return Err(RegisterError::LongFormTooShort(l.to_owned()));
			}
		}

		if self.opts.contains_key(key) {
			return Err(RegisterError::DuplicateKey(key.to_owned()));
		}
		if let Some(s) = short {
			if self.short.contains_key(&s) {
				return Err(RegisterError::DuplicateShortForm(s));
			}
		}
		if let Some(l) = long {
			if self.long.contains_key(l) {
				return Err(RegisterError::DuplicateLongForm(l.to_owned()));
			}
		}

		// Everything checks out; index it!
		if let Some(s) = short { self.short.insert(s, key.to_owned()); }
		if let Some(l) = long { self.long.insert(l.to_owned(), key.to_owned()); }
		if required { self.required.insert(key.to_owned()); }
		self.opts.insert(key.to_owned(), OptionDef {
			key: key.to_owned(),
			long: long.map(str::to_owned),
			short,
			boolean,
			required,
			usage: usage.to_owned(),
		});

		debug!(key, ?short, ?long, boolean, required, "Registered option.");
		Ok(())
	}

	/// # Clear Option.
	///
	/// Remove the option registered under `key`, if any, along with any value
	/// bound to it by a previous parse.
	pub fn clear(&mut self, key: &str) {
		if let Some(opt) = self.opts.remove(key) {
			if let Some(s) = opt.short { self.short.remove(&s); }
			if let Some(l) = opt.long.as_deref() { self.long.remove(l); }
			if opt.required { self.required.remove(key); }
			self.parsed.forget(key);
			debug!(key, "Cleared option.");
		}
	}

	/// # Clear Everything.
	///
	/// Remove all registered options and reset the parse state (bound values,
	/// positional arguments, and any error) back to square one.
	pub fn clear_all(&mut self) {
		let keys: Vec<String> = self.opts.keys().cloned().collect();
		for key in keys { self.clear(&key); }
		self.parsed = Parsed::default();
		debug!("Cleared all options.");
	}
}

impl Registry {
	/// # With Switch.
	///
	/// Register a boolean option, builder-style.
	///
	/// ## Errors
	///
	/// See [`Registry::register`].
	pub fn with_switch(mut self, key: &str, long: &str, short: &str, usage: &str)
	-> Result<Self, RegisterError> {
		self.register(key, long, short, true, false, usage)?;
		Ok(self)
	}

	/// # With Option.
	///
	/// Register an option that takes a value, builder-style.
	///
	/// ## Errors
	///
	/// See [`Registry::register`].
	pub fn with_option(
		mut self,
		key: &str,
		long: &str,
		short: &str,
		required: bool,
		usage: &str,
	) -> Result<Self, RegisterError> {
		self.register(key, long, short, false, required, usage)?;
		Ok(self)
	}

	/// # With Switches.
	///
	/// Register one or more `(key, long, short, usage)` boolean options,
	/// stopping at the first error.
	///
	/// ## Examples
	///
	/// ```
	/// let reg = argot::Registry::default()
	///     .with_switches([
	///         ("help", "--help", "-h", "Print help."),
	///         ("version", "--version", "-V", "Print version."),
	///     ])
	///     .unwrap();
	///
	/// assert_eq!(reg.len(), 2);
	/// ```
	///
	/// ## Errors
	///
	/// See [`Registry::register`].
	pub fn with_switches<'a, I>(self, opts: I) -> Result<Self, RegisterError>
	where I: IntoIterator<Item=(&'a str, &'a str, &'a str, &'a str)> {
		opts.into_iter().try_fold(self, |acc, (k, l, s, u)| acc.with_switch(k, l, s, u))
	}

	/// # With Options.
	///
	/// Register one or more `(key, long, short, required, usage)` valued
	/// options, stopping at the first error.
	///
	/// ## Errors
	///
	/// See [`Registry::register`].
	pub fn with_options<'a, I>(self, opts: I) -> Result<Self, RegisterError>
	where I: IntoIterator<Item=(&'a str, &'a str, &'a str, bool, &'a str)> {
		opts.into_iter().try_fold(self, |acc, (k, l, s, r, u)| acc.with_option(k, l, s, r, u))
	}
}

impl Registry {
	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, key: &str) -> bool { self.opts.contains_key(key) }

	#[must_use]
	/// # Get Definition.
	pub fn get(&self, key: &str) -> Option<&OptionDef> { self.opts.get(key) }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.opts.is_empty() }

	/// # Iterate Definitions.
	///
	/// Definitions are returned in key order.
	pub fn iter(&self) -> impl Iterator<Item=&OptionDef> { self.opts.values() }

	#[must_use]
	/// # Length.
	///
	/// Return the number of registered options.
	pub fn len(&self) -> usize { self.opts.len() }

	/// # Required Keys.
	pub fn required(&self) -> impl Iterator<Item=&str> {
		self.required.iter().map(String::as_str)
	}

	#[must_use]
	/// # Usage Text.
	///
	/// Return a human-readable listing of the registered options, one per
	/// line. This is the same as the [`Display`](fmt::Display) output.
	pub fn usage(&self) -> String { self.to_string() }

	/// # By Short Form.
	pub(crate) fn by_short(&self, short: char) -> Option<&OptionDef> {
		self.short.get(&short).and_then(|k| self.opts.get(k))
	}

	/// # By Long Form.
	pub(crate) fn by_long(&self, long: &str) -> Option<&OptionDef> {
		self.long.get(long).and_then(|k| self.opts.get(k))
	}
}

impl Registry {
	/// # Parse.
	///
	/// Scan `tokens` and store the result, replacing any previous one. The
	/// first token is assumed to be the program name and is skipped.
	///
	/// Check [`Parsed::has_error`] before trusting any of the values!
	pub fn parse<I>(&mut self, tokens: I) -> &Parsed
	where I: IntoIterator, I::Item: Into<String> {
		self.parsed = Scanner::new(self).scan(tokens);
		&self.parsed
	}

	/// # Parse Environment.
	///
	/// Same as [`Registry::parse`], but using [`std::env::args_os`] for the
	/// tokens. Arguments that aren't valid UTF-8 are converted lossily.
	///
	/// ## Examples
	///
	/// ```no_run
	/// let mut reg = argot::Registry::new()
	///     .with_switch("help", "--help", "-h", "Print help.").unwrap();
	///
	/// reg.parse_env();
	/// if reg.parsed().get_bool("help") { println!("{reg}"); }
	/// ```
	pub fn parse_env(&mut self) -> &Parsed {
		self.parse(std::env::args_os().map(|a| match a.into_string() {
			Ok(s) => s,
			Err(e) => e.to_string_lossy().into_owned(),
		}))
	}

	#[must_use]
	/// # Last Result.
	///
	/// Return the result of the most recent [`Registry::parse`]. If there
	/// hasn't been one, this will be empty.
	pub const fn parsed(&self) -> &Parsed { &self.parsed }
}
