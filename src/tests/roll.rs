use crate::{
	damage::DamageType,
	die::Die,
	generator::{Iter, Max},
	result::RollType,
	roll::Roll,
};

#[test]
fn from_dice_preserves_order() {
	let roll = Roll::from_dice([Die::D20, Die::D4, Die::D6]).unwrap();
	assert_eq!(roll.len(), 3);
	assert_eq!(roll[0], Die::D20);
	assert_eq!(roll[1], Die::D4);
	assert_eq!(roll[2], Die::D6);
}

#[test]
fn from_dice_rejects_empty_sequences() {
	assert!(Roll::from_dice([]).is_none());
}

#[test]
fn from_single_die() {
	let roll = Roll::from(Die::D8);
	assert_eq!(roll.len(), 1);
	assert!(!roll.is_empty());
	assert_eq!(roll.get(0), Some(&Die::D8));
	assert_eq!(roll.get(1), None);
}

#[test]
fn default_is_a_single_d20() {
	let roll = Roll::default();
	assert_eq!(roll.len(), 1);
	assert_eq!(roll[0], Die::D20);
}

#[test]
fn roll_equality_is_structural() {
	let a = Roll::from(Die::D20) + Die::D4;
	let b = Roll::from(Die::D20) + Die::D4;
	let c = Roll::from(Die::D4) + Die::D20;
	assert_eq!(a, b);
	assert_ne!(a, c);
}

#[test]
fn bounds_sum_over_entries() {
	let roll = composite();
	// 10D4+5: min 15, max 45; 3D8-2: min 1, max 22; 4D10: min 4, max 40
	assert_eq!(roll.min(), 20);
	assert_eq!(roll.max(), 107);
}

#[test]
fn display_joins_entries_with_plus() {
	assert_eq!(
		composite().to_string(),
		"10D4+5 (radiant) + 3D8-2 (poison) + 4D10 (force)",
	);
}

#[test]
fn concatenating_rolls_preserves_order() {
	let roll = (Roll::from(Die::D20) + Die::D4) + (Roll::from(Die::D6) + Die::D8);
	assert_eq!(roll.len(), 4);
	assert_eq!(roll.dice(), [Die::D20, Die::D4, Die::D6, Die::D8]);
}

#[test]
fn results_preserve_entry_order_and_lengths() {
	let roll = Roll::from(Die::new(2, 4)) + Die::D6;
	let results = roll.results(RollType::Regular, &mut Iter::new(vec![1, 2, 3])).unwrap();

	assert_eq!(results.len(), 2);
	assert_eq!(results[0].die(), Die::new(2, 4));
	assert_eq!(results[0].rolls(), [1, 2]);
	assert_eq!(results[1].die(), Die::D6);
	assert_eq!(results[1].rolls(), [3]);
	assert_eq!(results.total(), 6);
}

#[test]
fn roll_length_is_conserved_in_results() {
	let roll = composite();
	let results = roll.results(RollType::Regular, &mut Max).unwrap();

	let rolled: usize = results.iter().map(|result| result.rolls().len()).sum();
	let expected: usize = roll.iter().map(|die| usize::from(die.count)).sum();
	assert_eq!(rolled, expected);
	assert_eq!(rolled, 17);
}

#[test]
fn totals_group_by_damage() {
	let results = composite().results(RollType::Regular, &mut Max).unwrap();

	let totals = results.totals_by_damage();
	assert_eq!(totals.len(), 3);
	assert_eq!(totals.get(&DamageType::Radiant), Some(&45));
	assert_eq!(totals.get(&DamageType::Poison), Some(&22));
	assert_eq!(totals.get(&DamageType::Force), Some(&40));
	assert_eq!(totals.values().sum::<i32>(), results.total());
	assert_eq!(results.total(), composite().max());
}

#[test]
fn absent_damage_type_totals_zero() {
	let results = composite().results(RollType::Regular, &mut Max).unwrap();
	assert_eq!(results.total_by_damage(DamageType::Fire), 0);
	assert_eq!(results.total_by_damage(DamageType::Force), 40);
}

#[test]
fn entries_of_one_damage_type_can_be_filtered() {
	let roll = Roll::from(Die::new(2, 6).with_damage(DamageType::Fire))
		+ Die::new(1, 8).with_damage(DamageType::Radiant)
		+ Die::new(3, 4).with_damage(DamageType::Fire);
	let results = roll.results(RollType::Regular, &mut Max).unwrap();

	let fire: Vec<_> = results.by_damage(DamageType::Fire).collect();
	assert_eq!(fire.len(), 2);
	assert_eq!(fire[0].die(), roll[0]);
	assert_eq!(fire[1].die(), roll[2]);

	// Two entries of the same type sum into a single key
	assert_eq!(results.totals_by_damage().len(), 2);
	assert_eq!(results.total_by_damage(DamageType::Fire), 12 + 12);
}

#[test]
fn untyped_dice_group_under_unknown() {
	let results = Roll::from(Die::new(2, 10))
		.results(RollType::Regular, &mut Max)
		.unwrap();
	assert_eq!(results.total_by_damage(DamageType::Unknown), 20);
}

#[test]
fn result_equality_ignores_the_cached_aggregate() {
	let a = composite().results(RollType::Regular, &mut Max).unwrap();
	let b = composite().results(RollType::Regular, &mut Max).unwrap();

	// Compute the aggregate on one side only before comparing
	let _ = a.totals_by_damage();
	assert_eq!(a, b);
}

#[cfg(feature = "fastrand")]
mod standard {
	use super::composite;
	use crate::{
		generator::{CancelToken, Error, Standard},
		result::RollType,
	};

	#[test]
	fn totals_stay_within_bounds() {
		let roll = composite();
		let mut generator = Standard::default();

		for _ in 0..100 {
			let results = roll.results(RollType::Regular, &mut generator).unwrap();
			let total = results.total();
			assert!(
				(roll.min()..=roll.max()).contains(&total),
				"{total} outside [{}, {}]",
				roll.min(),
				roll.max(),
			);
			assert_eq!(results.totals_by_damage().values().sum::<i32>(), total);
		}
	}

	#[test]
	fn generator_failure_produces_no_partial_result() {
		let token = CancelToken::new();
		let mut generator = Standard::default().with_cancel(token.clone());

		token.cancel();
		let result = composite().results(RollType::Regular, &mut generator);
		assert!(matches!(result, Err(Error::Cancelled)));
	}
}

/// The composite roll `10D4+5 (radiant) + 3D8-2 (poison) + 4D10 (force)`,
/// built from values rather than notation.
fn composite() -> Roll {
	Roll::from(Die::new(10, 4).with_modifier(5).with_damage(DamageType::Radiant))
		+ Die::new(3, 8).with_modifier(-2).with_damage(DamageType::Poison)
		+ Die::new(4, 10).with_damage(DamageType::Force)
}
