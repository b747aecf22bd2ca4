#[cfg(feature = "build-binary")]
fn main() {
	use std::env;
	use std::io::{self, Write};

	use ariadne::{Color, Label, Report, ReportKind, Source};
	use chumsky::Parser;

	use keres::{generator::Standard, DamageType, RollType};

	let mut args: Vec<String> = env::args().skip(1).collect();
	let kind = match args.first().map(String::as_str) {
		Some("--advantage" | "-a") => {
			args.remove(0);
			RollType::Advantage
		}
		Some("--disadvantage" | "-d") => {
			args.remove(0);
			RollType::Disadvantage
		}
		_ => RollType::Regular,
	};

	let input = if args.is_empty() {
		let mut lines = io::stdin().lines();

		// If there isn't already input available in stdin, display a prompt for it
		if lines.size_hint().1.is_none() {
			print!("Enter roll notation: ");
			io::stdout().flush().unwrap();
		}

		// Grab the first line available from stdin
		lines.next().unwrap().unwrap()
	} else {
		// Obtain the notation by combining all args passed to the executable, so that it can be left unquoted
		// even with spaces
		args.join(" ")
	};

	let notation = input.to_lowercase();
	match keres::parse::roll().parse(&notation).into_result() {
		Ok(roll) => {
			let mut generator = Standard::default();
			match roll.results(kind, &mut generator) {
				Ok(results) => {
					for result in &results {
						println!("{result}");
					}

					for (damage, total) in results.totals_by_damage() {
						if *damage != DamageType::Unknown {
							println!("{damage}: {total}");
						}
					}
					println!("total: {}", results.total());
				}
				Err(roll_err) => eprintln!("Roll error: {roll_err}"),
			}
		}
		Err(parse_errs) => {
			for err in parse_errs {
				Report::build(ReportKind::Error, ("roll", err.span().into_range()))
					.with_message("Invalid roll notation")
					.with_label(
						Label::new(("roll", err.span().into_range()))
							.with_message(err.to_string())
							.with_color(Color::Red),
					)
					.finish()
					.eprint(("roll", Source::from(notation.as_str())))
					.unwrap();
			}
		}
	}
}

#[cfg(not(feature = "build-binary"))]
fn main() {
	println!("Nothing to do since the build-binary feature is disabled.")
}
