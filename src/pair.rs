// Problem: Two Sum
// Difficulty: Easy
// URL: https://leetcode.com/problems/two-sum/

// Time Complexity: O(n)
// Space Complexity: O(n)

use std::collections::HashMap;

/// Find the indices of two distinct elements of `values` that add up to `target`.
///
/// Scans left to right once. The first pair found, ordered by the position of
/// the second element, is returned as `(earlier, later)`. When a value occurs
/// more than once, its earliest index is the one reported.
///
/// Returns `None` when no pair exists; an empty slice never has a pair.
///
/// ```
/// use pair_finder::find_pair;
///
/// assert_eq!(find_pair(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(find_pair(&[1, 2, 3], 100), None);
/// ```
pub fn find_pair(values: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());

    for (i, &value) in values.iter().enumerate() {
        // An unrepresentable complement cannot match any element.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&j) = seen.get(&complement) {
                return Some((j, i));
            }
        }
        seen.entry(value).or_insert(i);
    }

    None
}

pub struct Solution;

impl Solution {
    /// Given an array of integers nums and an integer target,
    /// return indices of the two numbers such that they add up to target.
    ///
    /// Returns `[]` when there is no pair, or when an index of the pair does
    /// not fit in an `i32`.
    pub fn two_sum(nums: Vec<i32>, target: i32) -> Vec<i32> {
        let values: Vec<i64> = nums.iter().map(|&n| i64::from(n)).collect();

        find_pair(&values, i64::from(target))
            .and_then(index_pair)
            .unwrap_or_default()
    }
}

fn index_pair((i, j): (usize, usize)) -> Option<Vec<i32>> {
    Some(vec![i32::try_from(i).ok()?, i32::try_from(j).ok()?])
}
