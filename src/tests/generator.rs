use crate::generator::{Error, Iter, Max, NumberGenerator, Val};

#[test]
fn degenerate_range_yields_the_value_without_drawing() {
	// An empty Iter panics on any draw, so success proves no draw happened
	let mut generator = Iter::new(Vec::new());
	assert_eq!(generator.generate_between(7, 7).unwrap(), 7);
	assert_eq!(generator.generate(1).unwrap(), 1);
}

#[test]
fn inverted_range_is_an_error() {
	let mut generator = Iter::new(Vec::new());
	let result = generator.generate_between(5, 1);
	assert!(matches!(result, Err(Error::InvalidRange { min: 5, max: 1 })));
}

#[test]
fn val_always_yields_its_value() {
	let mut generator = Val(3);
	assert_eq!(generator.generate(20).unwrap(), 3);
	assert_eq!(generator.generate_between(1, 6).unwrap(), 3);
}

#[test]
fn max_always_yields_the_maximum() {
	let mut generator = Max;
	assert_eq!(generator.generate(20).unwrap(), 20);
	assert_eq!(generator.generate_between(-10, -2).unwrap(), -2);
}

#[test]
fn iter_yields_its_sequence_in_order() {
	let mut generator = Iter::new(vec![4, 2, 6]);
	assert!(generator.can_generate());
	assert_eq!(generator.generate(6).unwrap(), 4);
	assert_eq!(generator.generate(6).unwrap(), 2);
	assert_eq!(generator.generate(6).unwrap(), 6);
	assert!(!generator.can_generate());
}

#[cfg(feature = "fastrand")]
mod standard {
	use crate::generator::{CancelToken, Error, NumberGenerator, Standard};

	#[test]
	fn values_stay_in_the_requested_range() {
		let mut generator = Standard::default();
		for _ in 0..1000 {
			let value = generator.generate(6).unwrap();
			assert!((1..=6).contains(&value));
		}
	}

	#[test]
	fn all_sides_of_a_d20_occur() {
		let mut generator = Standard::default();
		let mut values = Vec::new();
		for _ in 0..1000 {
			values.push(generator.generate(20).unwrap());
		}

		for side in 1..=20 {
			assert!(values.contains(&side), "side {side} never occurred");
		}
	}

	#[test]
	fn negative_ranges_are_supported() {
		let mut generator = Standard::default();
		for _ in 0..100 {
			let value = generator.generate_between(-5, 5).unwrap();
			assert!((-5..=5).contains(&value));
		}
	}

	#[test]
	fn seeded_generators_are_reproducible() {
		let mut first = Standard::with_seed(0x750c38d574400);
		let mut second = Standard::with_seed(0x750c38d574400);

		for _ in 0..50 {
			assert_eq!(first.generate(100).unwrap(), second.generate(100).unwrap());
		}
	}

	#[test]
	fn inverted_range_is_an_error() {
		let result = Standard::default().generate_between(10, 9);
		assert!(matches!(result, Err(Error::InvalidRange { min: 10, max: 9 })));
	}

	#[test]
	fn cancellation_takes_effect_between_generations() {
		let token = CancelToken::new();
		let mut generator = Standard::default().with_cancel(token.clone());

		assert!(generator.generate(20).is_ok());
		token.cancel();
		assert!(matches!(generator.generate(20), Err(Error::Cancelled)));
		assert!(matches!(generator.generate_between(3, 3), Err(Error::Cancelled)));
	}
}

#[cfg(feature = "getrandom")]
mod crypto {
	use crate::generator::{CancelToken, Crypto, Error, NumberGenerator};

	#[test]
	fn values_stay_in_the_requested_range() {
		let mut generator = Crypto::new();
		for _ in 0..200 {
			let value = generator.generate(20).unwrap();
			assert!((1..=20).contains(&value));
		}
	}

	#[test]
	fn negative_ranges_are_supported() {
		let mut generator = Crypto::new();
		for _ in 0..100 {
			let value = generator.generate_between(-5, 5).unwrap();
			assert!((-5..=5).contains(&value));
		}
	}

	#[test]
	fn degenerate_range_yields_the_value() {
		assert_eq!(Crypto::new().generate_between(3, 3).unwrap(), 3);
	}

	#[test]
	fn inverted_range_is_an_error() {
		let result = Crypto::new().generate_between(1, 0);
		assert!(matches!(result, Err(Error::InvalidRange { min: 1, max: 0 })));
	}

	#[test]
	fn cancelled_token_aborts_generation() {
		let token = CancelToken::new();
		let mut generator = Crypto::new().with_cancel(token.clone());

		token.cancel();
		assert!(matches!(generator.generate(20), Err(Error::Cancelled)));
	}
}
