/*!
# Argot: Debug

This example registers a handful of options, parses whatever arguments are
fed to it, and displays the results.

Set `RUST_LOG=argot=trace` to watch the scanner work.
*/

use argot::Registry;
use tracing_subscriber::EnvFilter;



fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let reg = Registry::new()
		.with_switches([
			("help", "--help", "-h", "Print help information and exit."),
			("quiet", "--quiet", "-q", "Suppress output."),
			("verbose", "--verbose", "-v", "Print extra information."),
		])
		.and_then(|r| r.with_options([
			("input", "--input", "-i", true, "Input file."),
			("output", "--output", "-o", false, "Output file."),
			("level", "--level", "", false, "Compression level."),
		]));

	let mut reg = match reg {
		Ok(r) => r,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		},
	};

	let parsed = reg.parse_env().clone();
	if parsed.get_bool("help") {
		println!("USAGE:\n{reg}");
		return;
	}

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{parsed:?}");
	println!();

	match parsed.into_result() {
		Ok(p) => {
			println!("\x1b[2mPRETTY:\x1b[0m");
			for key in ["quiet", "verbose"] {
				println!("{key}: {}", p.get_bool(key));
			}
			for key in ["input", "output", "level"] {
				println!("{key}: {:?}", p.get_string(key));
			}
			println!("args: {:?}", p.args());
		},
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(1);
		},
	}
}
