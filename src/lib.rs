/*!
# Argot

This crate provides a getopt-style CLI option registry and argument scanner.

Declare your options upfront in a [`Registry`] (each may have a short form,
a long form, or both, and is either a boolean switch or takes a value), then
hand it the raw arguments. Out comes a [`Parsed`] with the switches that were
present, the values that were bound, the positional arguments left over, and
the first error encountered, if any.

The following forms are recognized:

| Form | Example | Meaning |
| ---- | ------- | ------- |
| `-x` | `-l` | Boolean switch, or option with the value in the next argument. |
| `--xx` | `--long` | Same, long-style. |
| `-x=v` | `-f=bar` | Short option with value. |
| `--xx=v` | `--foo=bar` | Long option with value. |
| `-x v` | `-f bar` | Short option with value. |
| `--xx v` | `--foo bar` | Long option with value. |
| `-xyz` | `-tuv` | Combined boolean switches. |
| `-xVAL` | `-fbar` | Short option with value, no separator. |

Anything else is a positional argument.

Parsing stops at the first error; partial results are kept, but shouldn't be
trusted.



## Logging

Registration and scanning emit [`tracing`](https://crates.io/crates/tracing)
events at the `debug` and `trace` levels. Nothing is printed unless your
program installs a subscriber.



## Example

```
use argot::Registry;

let mut reg = Registry::new()
    .with_switches([
        ("help", "--help", "-h", "Print help."),
        ("verbose", "--verbose", "-v", "Be chatty."),
    ])
    .unwrap() // Errors only happen if an option is malformed or repeated.
    .with_option("threads", "--threads", "-j", false, "Thread count.")
    .unwrap();

// Not every character in -vj4 is a registered short form, so it is read as
// -v with the value "j4". But -v is a switch! Errors are recorded rather than
// returned.
assert!(reg.parse(["prog", "-vj4", "src/"]).has_error());

let parsed = reg.parse(["prog", "-v", "-j4", "src/"]);
assert!(! parsed.has_error());
assert!(parsed.get_bool("verbose"));
assert!(! parsed.get_bool("help"));
assert_eq!(parsed.get_string("threads"), "4");
assert_eq!(parsed.args(), ["src/"]);

// Need some help text?
println!("{reg}");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod opt;
mod registry;
mod scan;

pub use error::{
	RegisterError,
	ScanError,
};
pub use opt::OptionDef;
pub use registry::Registry;
pub use scan::{
	Parsed,
	Scanner,
};



#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
