/*!
# Argot: Argument Scanner.
*/

mod parsed;
mod token;

pub use parsed::Parsed;
use crate::{
	OptionDef,
	Registry,
	ScanError,
};
use std::collections::BTreeSet;
use token::Token;
use tracing::{
	debug,
	trace,
};



#[derive(Debug, Clone, Copy)]
/// # Argument Scanner.
///
/// `Scanner` walks a list of raw arguments, matching each against a
/// [`Registry`] and collecting the results into a [`Parsed`].
///
/// The first argument is assumed to be the program name and is skipped.
/// Everything after is interpreted according to its shape:
///
/// | Form | Example | Meaning |
/// | ---- | ------- | ------- |
/// | `-x` | `-l` | Boolean switch, or option with the value in the next argument. |
/// | `--xx` | `--long` | Same, long-style. |
/// | `-x=v` | `-f=bar` | Short option with value. |
/// | `--xx=v` | `--foo=bar` | Long option with value. |
/// | `-x v` | `-f bar` | Short option with value. |
/// | `--xx v` | `--foo bar` | Long option with value. |
/// | `-xyz` | `-tuv` | Combined boolean switches. |
/// | `-xVAL` | `-fbar` | Short option with value, no separator. |
///
/// Anything else is a positional argument.
///
/// A clump like `-abc` is treated as combined switches only if _every_
/// character is a registered short form; otherwise it is treated as `-a`
/// with the value `bc`.
///
/// Scanning stops at the first error.
///
/// ## Examples
///
/// ```
/// use argot::{Registry, Scanner};
///
/// let reg = Registry::new()
///     .with_switches([("a", "", "a", ""), ("b", "", "b", "")]).unwrap()
///     .with_option("file", "file", "f", false, "").unwrap();
///
/// let parsed = Scanner::new(&reg).scan(["prog", "-ab", "-fout.txt", "extra"]);
/// assert!(! parsed.has_error());
/// assert!(parsed.get_bool("a") && parsed.get_bool("b"));
/// assert_eq!(parsed.get_string("file"), "out.txt");
/// assert_eq!(parsed.args(), ["extra"]);
/// ```
pub struct Scanner<'a> {
	/// # Options.
	reg: &'a Registry,
}

impl<'a> Scanner<'a> {
	#[must_use]
	/// # New.
	pub const fn new(reg: &'a Registry) -> Self { Self { reg } }

	/// # Scan.
	///
	/// Scan the arguments, returning a fresh [`Parsed`].
	pub fn scan<I>(&self, tokens: I) -> Parsed
	where I: IntoIterator, I::Item: Into<String> {
		let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
		let mut out = Parsed::default();
		let mut found = BTreeSet::new();

		let mut pos = 1;
		while pos < tokens.len() {
			match self.step(&tokens, pos, &mut out, &mut found) {
				Ok(used) => { pos += used; },
				Err(e) => {
					debug!(pos, token = tokens[pos].as_str(), error = %e, "Scan halted.");
					out.error = Some(e);
					return out;
				},
			}
		}

		if let Err(e) = self.check_required(&found) {
			debug!(error = %e, "Scan incomplete.");
			out.error = Some(e);
		}
		else {
			debug!(
				switches = out.bools.len(),
				values = out.strings.len(),
				args = out.args.len(),
				"Scan complete."
			);
		}

		out
	}

	/// # Step.
	///
	/// Handle the token at `pos`, returning the number of tokens used up:
	/// two if the following value was claimed, one otherwise.
	fn step(
		&self,
		tokens: &[String],
		pos: usize,
		out: &mut Parsed,
		found: &mut BTreeSet<&'a str>,
	) -> Result<usize, ScanError> {
		let raw = tokens[pos].as_str();
		let kind = Token::from(raw);
		trace!(pos, token = raw, ?kind, "Scanning.");

		match kind {
			Token::Equals { long, key, value } => {
				let opt = (
					if long { self.reg.by_long(key) }
					else { one_char(key).and_then(|c| self.reg.by_short(c)) }
				).ok_or_else(|| ScanError::UnknownOption(key.to_owned()))?;

				if opt.boolean { Err(ScanError::BooleanWithValue(raw.to_owned())) }
				else if value.is_empty() { Err(ScanError::MissingValue(raw.to_owned())) }
				else {
					bind(out, found, opt, value);
					Ok(1)
				}
			},

			Token::Long(name) => {
				let opt = self.reg.by_long(name)
					.ok_or_else(|| ScanError::UnknownOption(raw.to_owned()))?;
				self.switch_or_lookahead(tokens, pos, out, found, opt)
			},

			Token::Short(rest) => {
				// A lone switch or option.
				if let Some(c) = one_char(rest) {
					let opt = self.reg.by_short(c)
						.ok_or_else(|| ScanError::UnknownOption(raw.to_owned()))?;
					self.switch_or_lookahead(tokens, pos, out, found, opt)
				}
				// Combined switches.
				else if let Some(group) = self.combined(rest) {
					if let Some(bad) = group.iter().find(|o| ! o.boolean) {
						return Err(ScanError::CombinedNonBoolean(bad.short.unwrap_or_default()));
					}
					for opt in group { out.bools.insert(opt.key.clone()); }
					Ok(1)
				}
				// A short option with its value smushed on.
				else {
					let mut chars = rest.chars();
					let first = chars.next().unwrap_or_default();
					let opt = self.reg.by_short(first)
						.ok_or_else(|| ScanError::UnknownOption(first.to_string()))?;
					if opt.boolean {
						return Err(ScanError::BooleanWithValue(raw.to_owned()));
					}
					bind(out, found, opt, chars.as_str());
					Ok(1)
				}
			},

			Token::Positional => {
				out.args.push(raw.to_owned());
				Ok(1)
			},
		}
	}

	/// # Switch or Lookahead.
	///
	/// Booleans are simply marked present; everything else takes the next
	/// token as its value.
	fn switch_or_lookahead(
		&self,
		tokens: &[String],
		pos: usize,
		out: &mut Parsed,
		found: &mut BTreeSet<&'a str>,
		opt: &'a OptionDef,
	) -> Result<usize, ScanError> {
		if opt.boolean {
			out.bools.insert(opt.key.clone());
			return Ok(1);
		}

		let value = lookahead(tokens, pos)
			.ok_or_else(|| ScanError::MissingValue(tokens[pos].clone()))?;
		bind(out, found, opt, value);
		Ok(2)
	}

	/// # Combined Switches.
	///
	/// Return the definitions for each character in `rest`, provided they
	/// are _all_ registered short forms. Whether or not they're all switches
	/// is the caller's problem.
	fn combined(&self, rest: &str) -> Option<Vec<&'a OptionDef>> {
		rest.chars().map(|c| self.reg.by_short(c)).collect()
	}

	/// # Check Required.
	///
	/// Make sure every required option turned up.
	fn check_required(&self, found: &BTreeSet<&'a str>) -> Result<(), ScanError> {
		let missing: Vec<String> = self.reg.required()
			.filter(|k| ! found.contains(k))
			.map(|k| self.reg.get(k).map_or_else(|| k.to_owned(), OptionDef::forms))
			.collect();

		if missing.is_empty() { Ok(()) }
		else { Err(ScanError::MissingRequired(missing)) }
	}
}



/// # Bind Value.
///
/// Record the value for an option, and note its presence if required.
fn bind<'a>(
	out: &mut Parsed,
	found: &mut BTreeSet<&'a str>,
	opt: &'a OptionDef,
	value: &str,
) {
	out.strings.insert(opt.key.clone(), value.to_owned());
	if opt.required { found.insert(opt.key.as_str()); }
}

/// # Lookahead.
///
/// Return the token following `pos` if it is usable as a value, i.e. it
/// exists, isn't empty, and doesn't look like an option itself.
fn lookahead(tokens: &[String], pos: usize) -> Option<&str> {
	tokens.get(pos + 1)
		.map(String::as_str)
		.filter(|v| ! v.is_empty() && ! token::is_keylike(v))
}

/// # One Char?
///
/// Return the character if `s` contains exactly one.
fn one_char(s: &str) -> Option<char> {
	let mut chars = s.chars();
	let c = chars.next()?;
	if chars.next().is_none() { Some(c) }
	else { None }
}



#[cfg(test)]
mod test {
	use super::*;
	use assert_matches::assert_matches;

	/// # Registry With a Single `-t`/`--test` Option.
	fn test_opt(required: bool) -> Registry {
		Registry::new()
			.with_option("test", "test", "t", required, "Test.")
			.expect("Registry::with_option failed.")
	}

	/// # Registry With `-a`, `-b`, `-c` Switches.
	fn abc() -> Registry {
		Registry::new()
			.with_switches([("a", "", "a", ""), ("b", "", "b", ""), ("c", "", "c", "")])
			.expect("Registry::with_switches failed.")
	}

	#[test]
	fn t_value_forms() {
		let mut reg = test_opt(false);
		let cases: [(&[&str], &str); 5] = [
			(&["prog", "-t=val1"], "val1"),
			(&["prog", "--test=val2"], "val2"),
			(&["prog", "-t", "val3"], "val3"),
			(&["prog", "--test", "val4"], "val4"),
			(&["prog", "-tval5"], "val5"),
		];
		for (args, expected) in cases {
			let parsed = reg.parse(args.iter().copied());
			assert!(! parsed.has_error(), "Unexpected error for {args:?}: {:?}", parsed.error());
			assert_eq!(parsed.get_string("test"), expected, "Wrong value for {args:?}.");
			assert!(parsed.args().is_empty(), "The value for {args:?} leaked into args.");

			reg.clear_all();
			reg.register("test", "test", "t", false, false, "Test.")
				.expect("Registry::register failed.");
		}
	}

	#[test]
	fn t_value_edges() {
		let reg = test_opt(false);
		let scan = |args: &[&str]| Scanner::new(&reg).scan(args.iter().copied());

		// Only the first = splits.
		assert_eq!(scan(&["prog", "--test=a=b"]).get_string("test"), "a=b");

		// A lone dash is a perfectly good value.
		assert_eq!(scan(&["prog", "-t", "-"]).get_string("test"), "-");

		// Smushed values are taken verbatim.
		assert_eq!(scan(&["prog", "-t=x"]).get_string("test"), "x");
		assert_eq!(scan(&["prog", "-t-x"]).get_string("test"), "-x");

		// Repeating the short form makes it a (bad) combination.
		assert_eq!(
			scan(&["prog", "-tt"]).error(),
			Some(&ScanError::CombinedNonBoolean('t')),
		);

		// The last one wins.
		assert_eq!(scan(&["prog", "-t", "one", "--test=two"]).get_string("test"), "two");
	}

	#[test]
	fn t_missing_value() {
		let reg = test_opt(false)
			.with_switch("flag", "flag", "f", "")
			.expect("Registry::with_switch failed.");
		let scan = |args: &[&str]| Scanner::new(&reg).scan(args.iter().copied());

		let cases: [(&[&str], &str); 9] = [
			(&["prog", "-t"], "-t"),
			(&["prog", "--test"], "--test"),
			(&["prog", "-t", "-f"], "-t"),
			(&["prog", "--test", "--flag"], "--test"),
			(&["prog", "-t", "--test=x"], "-t"),
			(&["prog", "-t", "--"], "-t"),
			(&["prog", "-t", ""], "-t"),
			(&["prog", "-t="], "-t="),
			(&["prog", "--test="], "--test="),
		];
		for (args, token) in cases {
			assert_eq!(
				scan(args).error(),
				Some(&ScanError::MissingValue(token.to_owned())),
				"Bug: {args:?} should be missing a value.",
			);
		}
	}

	#[test]
	fn t_switches() {
		let reg = abc()
			.with_switch("wow", "wow", "", "")
			.expect("Registry::with_switch failed.");

		let parsed = Scanner::new(&reg).scan(["prog", "-a", "foo", "--wow", "-bc", "bar"]);
		assert!(! parsed.has_error());
		assert!(["a", "b", "c", "wow"].iter().all(|k| parsed.get_bool(k)));
		assert_eq!(parsed.args(), ["foo", "bar"]);

		// Unset switches are just false.
		let parsed = Scanner::new(&reg).scan(["prog", "-a"]);
		assert!(parsed.get_bool("a"));
		assert!(! parsed.get_bool("b"));
		assert!(! parsed.get_bool("nope"));

		// Switches can't have values.
		let cases: [(&[&str], &str); 3] = [
			(&["prog", "-a=1"], "-a=1"),
			(&["prog", "--wow=1"], "--wow=1"),
			(&["prog", "-a1"], "-a1"),
		];
		for (args, token) in cases {
			assert_eq!(
				Scanner::new(&reg).scan(args.iter().copied()).error(),
				Some(&ScanError::BooleanWithValue(token.to_owned())),
				"Bug: {args:?} should have complained about a boolean value.",
			);
		}
	}

	#[test]
	fn t_combined() {
		let reg = abc();
		let parsed = Scanner::new(&reg).scan(["prog", "-abc"]);
		assert!(! parsed.has_error());
		assert!(parsed.get_bool("a") && parsed.get_bool("b") && parsed.get_bool("c"));

		// Order and repetition don't matter.
		let parsed = Scanner::new(&reg).scan(["prog", "-cca"]);
		assert!(! parsed.has_error());
		assert!(parsed.get_bool("a") && ! parsed.get_bool("b") && parsed.get_bool("c"));

		// Throw an option into the mix.
		let reg = Registry::new()
			.with_switches([("a", "", "a", ""), ("b", "", "b", "")])
				.expect("Registry::with_switches failed.")
			.with_option("c", "", "c", false, "")
				.expect("Registry::with_option failed.");

		// If every character is known, it's a combination, and the option
		// isn't welcome, even in front.
		for args in [["prog", "-abc"], ["prog", "-cab"]] {
			let parsed = Scanner::new(&reg).scan(args);
			assert_eq!(parsed.error(), Some(&ScanError::CombinedNonBoolean('c')));
			assert!(! parsed.get_bool("a"), "Nothing should be set on failure.");
		}

		// Separately, it's fine.
		let parsed = Scanner::new(&reg).scan(["prog", "-ab", "-c", "val"]);
		assert!(! parsed.has_error());
		assert!(parsed.get_bool("a") && parsed.get_bool("b"));
		assert_eq!(parsed.get_string("c"), "val");

		// If any character is unknown, the first had better take a value.
		let parsed = Scanner::new(&reg).scan(["prog", "-cxyz"]);
		assert!(! parsed.has_error());
		assert_eq!(parsed.get_string("c"), "xyz");
		assert_eq!(
			Scanner::new(&reg).scan(["prog", "-axyz"]).error(),
			Some(&ScanError::BooleanWithValue("-axyz".to_owned())),
		);
		assert_eq!(
			Scanner::new(&reg).scan(["prog", "-xab"]).error(),
			Some(&ScanError::UnknownOption("x".to_owned())),
		);
	}

	#[test]
	fn t_unknown() {
		let reg = test_opt(false);
		let cases: [(&[&str], &str); 8] = [
			(&["prog", "-x"], "-x"),
			(&["prog", "--nope"], "--nope"),
			(&["prog", "--nope=1"], "nope"),
			(&["prog", "-x=1"], "x"),
			(&["prog", "-tx=1"], "tx"),
			(&["prog", "--t=1"], "t"),
			(&["prog", "-test=1"], "test"),
			(&["prog", "-xyz"], "x"),
		];
		for (args, form) in cases {
			assert_eq!(
				Scanner::new(&reg).scan(args.iter().copied()).error(),
				Some(&ScanError::UnknownOption(form.to_owned())),
				"Bug: {args:?} should be unknown.",
			);
		}
	}

	#[test]
	fn t_positional() {
		let reg = Registry::new()
			.with_options([("a", "", "a", false, ""), ("b", "", "b", false, "")])
			.expect("Registry::with_options failed.");

		let parsed = Scanner::new(&reg).scan(["prog", "-a=1", "x", "-b", "2", "y"]);
		assert!(! parsed.has_error());
		assert_eq!(parsed.args(), ["x", "y"]);
		assert_eq!(parsed.get_string("a"), "1");
		assert_eq!(parsed.get_string("b"), "2");

		// Lone dashes and empties are positional too.
		let parsed = Scanner::new(&reg).scan(["prog", "-", "", "--", "z"]);
		assert!(! parsed.has_error());
		assert_eq!(parsed.args(), ["-", "", "--", "z"]);

		// The program name is never an argument.
		let parsed = Scanner::new(&reg).scan(["-a"]);
		assert!(! parsed.has_error());
		assert!(parsed.args().is_empty());
		assert!(! Scanner::new(&reg).scan(Vec::<String>::new()).has_error());
	}

	#[test]
	fn t_required() {
		// Any of the value forms will do.
		let cases: [&[&str]; 5] = [
			&["prog", "-t=val"],
			&["prog", "--test=val"],
			&["prog", "-t", "val"],
			&["prog", "--test", "val"],
			&["prog", "-tval"],
		];
		for args in cases {
			let reg = test_opt(true);
			let parsed = Scanner::new(&reg).scan(args.iter().copied());
			assert!(! parsed.has_error(), "Unexpected error for {args:?}: {:?}", parsed.error());
		}

		// But it has to be there!
		let reg = test_opt(true);
		let cases: [&[&str]; 3] = [&["prog", "extra"], &["prog"], &[]];
		for args in cases {
			assert_eq!(
				Scanner::new(&reg).scan(args.iter().copied()).error(),
				Some(&ScanError::MissingRequired(vec!["-t or --test".to_owned()])),
			);
		}
	}

	#[test]
	fn t_required_many() {
		let reg = Registry::new()
			.with_options([
				("test1", "", "a", true, ""),
				("test2", "wow", "", true, ""),
				("test3", "", "b", true, ""),
				("test4", "", "c", true, ""),
				("test5", "hey", "h", true, ""),
			])
			.expect("Registry::with_options failed.");

		let parsed = Scanner::new(&reg).scan([
			"prog", "-a=foo", "--wow", "suchval", "-bbar", "-c", "baz", "--hey=yikes", "meh",
		]);
		assert!(! parsed.has_error());
		assert_eq!(parsed.args(), ["meh"]);

		// Drop a few.
		let parsed = Scanner::new(&reg).scan(["prog", "-a=foo", "--wow", "suchval"]);
		assert_matches!(
			parsed.error(),
			Some(ScanError::MissingRequired(list)) if list.len() == 3
		);
		let msg = parsed.error().map(ToString::to_string).unwrap_or_default();
		assert!(msg.starts_with("Required option(s) not provided: "));
		for form in ["-b", "-c", "-h or --hey"] {
			assert!(msg.contains(form), "Missing {form:?} in {msg:?}.");
		}
		assert!(! msg.contains("--wow"));
	}

	#[test]
	fn t_fail_fast() {
		let reg = Registry::new()
			.with_options([("a", "", "a", false, ""), ("b", "", "b", true, "")])
			.expect("Registry::with_options failed.");

		// Only the first error counts, and only what came before sticks.
		let parsed = Scanner::new(&reg).scan(["prog", "-a=1", "x", "--nope", "-b=", "-b", "2", "y"]);
		assert_eq!(parsed.error(), Some(&ScanError::UnknownOption("--nope".to_owned())));
		assert_eq!(parsed.get_string("a"), "1");
		assert_eq!(parsed.get_string("b"), "");
		assert_eq!(parsed.args(), ["x"]);
	}

	#[test]
	fn t_one_char() {
		assert_eq!(one_char("a"), Some('a'));
		assert_eq!(one_char("é"), Some('é'));
		assert_eq!(one_char(""), None);
		assert_eq!(one_char("ab"), None);
	}
}
