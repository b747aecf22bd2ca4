//! Abstractions for producing the random numbers that drive dice rolls.
//!
//! Everything in the rolling engine draws its variability from a
//! [`NumberGenerator`], so swapping the generator swaps the randomness
//! characteristics of the whole crate: [`Standard`] for fast gameplay rolls,
//! [`Crypto`] for fairness-sensitive ones, and [`Val`]/[`Max`]/[`Iter`] for
//! deterministic tests.

use std::{
	cmp::Ordering,
	iter::Peekable,
	sync::{
		atomic::{AtomicBool, Ordering as AtomicOrdering},
		Arc,
	},
};

#[cfg(feature = "fastrand")]
use fastrand::Rng;

/// An error resulting from number generation
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The requested range is inverted (its minimum is greater than its maximum).
	#[error("invalid range: minimum {min} is greater than maximum {max}")]
	InvalidRange {
		/// Requested minimum
		min: i32,

		/// Requested maximum
		max: i32,
	},

	/// The generation was aborted by a cancelled [`CancelToken`].
	#[error("number generation was cancelled")]
	Cancelled,

	/// The operating system's entropy source failed.
	#[cfg(feature = "getrandom")]
	#[error("entropy source failure: {0}")]
	Entropy(#[from] getrandom::Error),
}

/// A cooperative cancellation flag for in-flight number generation.
///
/// Tokens are cheap to clone; all clones observe the same flag. A generator
/// holding a cancelled token fails with [`Error::Cancelled`] instead of
/// producing further values, which aborts any roll in progress.
///
/// # Examples
/// ```
/// use keres::generator::{CancelToken, Error, NumberGenerator, Standard};
///
/// let token = CancelToken::new();
/// let mut gen = Standard::default().with_cancel(token.clone());
///
/// token.cancel();
/// assert!(matches!(gen.generate(20), Err(Error::Cancelled)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
	/// Creates a new token in the not-cancelled state.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Flags the token as cancelled. All clones of the token are affected.
	pub fn cancel(&self) {
		self.0.store(true, AtomicOrdering::Relaxed);
	}

	/// Checks whether the token has been cancelled.
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		self.0.load(AtomicOrdering::Relaxed)
	}
}

/// Produces integers drawn uniformly from closed ranges - the sole source of
/// randomness for the rolling engine.
pub trait NumberGenerator {
	/// Draws a single value uniformly distributed in `[min, max]`.
	///
	/// This is the raw primitive each generator implements; it is only ever
	/// called with `min < max`. Callers should use [`Self::generate`] or
	/// [`Self::generate_between`], which validate the range and handle
	/// cancellation and degenerate ranges before delegating here.
	///
	/// # Errors
	/// If the generator's underlying source fails or is cancelled, an error
	/// variant is returned.
	fn draw(&mut self, min: i32, max: i32) -> Result<i32, Error>;

	/// The cancellation token consulted before drawing, if the generator
	/// carries one.
	fn cancel_token(&self) -> Option<&CancelToken> {
		None
	}

	/// Generates a value in the closed range `[min, max]`.
	///
	/// A range with `min == max` yields that value directly without consulting
	/// the underlying source.
	///
	/// # Errors
	/// [`Error::InvalidRange`] if `max < min`, [`Error::Cancelled`] if the
	/// generator's token has been cancelled, or any error from the underlying
	/// source.
	fn generate_between(&mut self, min: i32, max: i32) -> Result<i32, Error> {
		if self.cancel_token().is_some_and(CancelToken::is_cancelled) {
			return Err(Error::Cancelled);
		}

		match max.cmp(&min) {
			Ordering::Less => Err(Error::InvalidRange { min, max }),
			Ordering::Equal => Ok(min),
			Ordering::Greater => self.draw(min, max),
		}
	}

	/// Generates a value in the closed range `[1, max]` - shorthand for
	/// rolling a single die face.
	///
	/// # Errors
	/// Same conditions as [`Self::generate_between`].
	fn generate(&mut self, max: i32) -> Result<i32, Error> {
		self.generate_between(1, max)
	}
}

/// Generates numbers with [fastrand]'s fast, non-cryptographic PRNG.
/// Sufficient for ordinary gameplay use and the default choice for most call
/// sites. Requires the `fastrand` feature (enabled by default).
///
/// # Examples
///
/// ## Default generator
/// ```
/// use keres::generator::{NumberGenerator, Standard};
///
/// let mut gen = Standard::default();
/// let value = gen.generate(20)?;
/// assert!((1..=20).contains(&value));
/// # Ok::<(), keres::generator::Error>(())
/// ```
///
/// ## Manually seeded generator
/// ```
/// use keres::generator::{NumberGenerator, Standard};
///
/// let mut first = Standard::with_seed(0x750c38d574400);
/// let mut second = Standard::with_seed(0x750c38d574400);
/// assert_eq!(first.generate(100)?, second.generate(100)?);
/// # Ok::<(), keres::generator::Error>(())
/// ```
#[cfg(feature = "fastrand")]
#[derive(Debug, Clone, Default)]
pub struct Standard {
	/// PRNG state the values are drawn from
	rng: Rng,

	/// Token checked before each generation
	cancel: CancelToken,
}

#[cfg(feature = "fastrand")]
impl Standard {
	/// Creates a new standard generator from the given RNG instance.
	#[must_use]
	pub fn new(rng: Rng) -> Self {
		Self {
			rng,
			cancel: CancelToken::new(),
		}
	}

	/// Creates a new standard generator with a pre-seeded RNG instance,
	/// yielding a reproducible sequence of values.
	#[must_use]
	pub fn with_seed(seed: u64) -> Self {
		Self::new(Rng::with_seed(seed))
	}

	/// Attaches a cancellation token to the generator.
	#[must_use]
	pub fn with_cancel(mut self, token: CancelToken) -> Self {
		self.cancel = token;
		self
	}
}

#[cfg(feature = "fastrand")]
impl NumberGenerator for Standard {
	fn draw(&mut self, min: i32, max: i32) -> Result<i32, Error> {
		Ok(self.rng.i32(min..=max))
	}

	fn cancel_token(&self) -> Option<&CancelToken> {
		Some(&self.cancel)
	}
}

/// Generates numbers from the operating system's entropy source via
/// [getrandom], debiased with rejection sampling; unbiased even for
/// adversarial or fairness-sensitive use. Requires the `getrandom` feature
/// (enabled by default).
///
/// # Examples
/// ```
/// use keres::generator::{Crypto, NumberGenerator};
///
/// let mut gen = Crypto::new();
/// let value = gen.generate_between(-5, 5)?;
/// assert!((-5..=5).contains(&value));
/// # Ok::<(), keres::generator::Error>(())
/// ```
#[cfg(feature = "getrandom")]
#[derive(Debug, Clone, Default)]
pub struct Crypto {
	/// Token checked before each generation and each entropy draw
	cancel: CancelToken,
}

#[cfg(feature = "getrandom")]
impl Crypto {
	/// Creates a new cryptographic generator.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches a cancellation token to the generator.
	#[must_use]
	pub fn with_cancel(mut self, token: CancelToken) -> Self {
		self.cancel = token;
		self
	}
}

#[cfg(feature = "getrandom")]
impl NumberGenerator for Crypto {
	fn draw(&mut self, min: i32, max: i32) -> Result<i32, Error> {
		// Closed i32 range, so the span always fits in u64
		let span = (i64::from(max) - i64::from(min) + 1).unsigned_abs();

		// Accept only draws below the largest multiple of the span,
		// rejecting the biased tail
		let limit = u64::MAX - (u64::MAX % span);
		loop {
			// The entropy source may be slow or blocking, so an in-flight
			// cancellation must be able to abort between draws
			if self.cancel.is_cancelled() {
				return Err(Error::Cancelled);
			}

			let mut buf = [0_u8; 8];
			getrandom::getrandom(&mut buf)?;
			let raw = u64::from_le_bytes(buf);
			if raw < limit {
				#[expect(clippy::cast_possible_truncation, reason = "min + offset <= max by construction")]
				#[expect(clippy::cast_possible_wrap, reason = "raw % span < span, which fits in i64")]
				return Ok((i64::from(min) + (raw % span) as i64) as i32);
			}
		}
	}

	fn cancel_token(&self) -> Option<&CancelToken> {
		Some(&self.cancel)
	}
}

/// Generates numbers that always have a specific value, regardless of the
/// requested range. Mainly useful for testing purposes.
///
/// # Examples
/// ```
/// use keres::generator::{NumberGenerator, Val};
///
/// let mut gen = Val(3);
/// assert_eq!(gen.generate(20)?, 3);
/// assert_eq!(gen.generate_between(1, 6)?, 3);
/// # Ok::<(), keres::generator::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Val(pub i32);

impl NumberGenerator for Val {
	/// Draws a single value, always the one the generator was created with.
	fn draw(&mut self, _min: i32, _max: i32) -> Result<i32, Error> {
		Ok(self.0)
	}
}

/// Generates numbers that always have the maximum value of the requested
/// range.
///
/// # Examples
/// ```
/// use keres::generator::{Max, NumberGenerator};
///
/// let mut gen = Max;
/// assert_eq!(gen.generate(20)?, 20);
/// assert_eq!(gen.generate_between(1, 6)?, 6);
/// # Ok::<(), keres::generator::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
#[expect(clippy::exhaustive_structs, reason = "Highly unlikely to change")]
pub struct Max;

impl NumberGenerator for Max {
	/// Draws a single value, always the maximum of the range.
	fn draw(&mut self, _min: i32, max: i32) -> Result<i32, Error> {
		Ok(max)
	}
}

/// Generates numbers from an iterator of values. Mainly useful for testing
/// purposes.
///
/// # Examples
/// ```
/// use keres::generator::{Iter, NumberGenerator};
///
/// let mut gen = Iter::new(vec![1, 2, 3]);
/// assert_eq!(gen.generate(6)?, 1);
/// assert_eq!(gen.generate(6)?, 2);
/// assert_eq!(gen.generate(6)?, 3);
/// # Ok::<(), keres::generator::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Iter<I: Iterator<Item = i32>>(Peekable<I>);

impl<I: Iterator<Item = i32>> Iter<I> {
	/// Checks whether the iterator still has values available.
	pub fn can_generate(&mut self) -> bool {
		self.0.peek().is_some()
	}

	/// Creates a new generator that uses the given iterator to provide
	/// values.
	#[must_use]
	pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
		Self(iter.into_iter().peekable())
	}
}

impl<I: Iterator<Item = i32>> NumberGenerator for Iter<I> {
	/// Draws the value from the next iteration.
	///
	/// # Panics
	/// If the iterator has finished, this will panic.
	#[expect(
		clippy::expect_used,
		reason = "Mostly for testing, otherwise manual checking of can_generate() is expected"
	)]
	fn draw(&mut self, _min: i32, _max: i32) -> Result<i32, Error> {
		Ok(self.0.next().expect("iterator is finished"))
	}
}
