#![cfg(feature = "serde")]

//! Serde support for the notation types: anything that parses and formats
//! canonical dice notation serializes as its notation string rather than as a
//! structured object, so persisted values stay human-readable and bit-exact
//! with display output.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{damage::DamageType, die::Die, roll::Roll};

/// Generates string-notation serde implementations for a type with
/// `Display`, `FromStr`, and `Default`: serialization emits the canonical
/// notation, deserialization expects a string (any other token is an error)
/// and maps `null` to the type's default.
macro_rules! notation_serde_impl {
	($ty:ty) => {
		impl Serialize for $ty {
			fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.collect_str(self)
			}
		}

		impl<'de> Deserialize<'de> for $ty {
			fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				match Option::<String>::deserialize(deserializer)? {
					Some(notation) => notation.parse().map_err(de::Error::custom),
					None => Ok(Self::default()),
				}
			}
		}
	};
}

notation_serde_impl!(Die);
notation_serde_impl!(Roll);
notation_serde_impl!(DamageType);
