use super::{Comparisons, Sorter};

/// Insertion sort that locates each insertion point by binary search.
///
/// Each midpoint test of the search costs one comparison whichever way it branches.
/// Keys equal to an element of the sorted prefix are placed after it, so
/// equal keys keep their input order. The prefix is searched as the closed
/// interval `[left, right - 1]`, with `right` held exclusive so the bound
/// never drops below zero.
pub fn binary_insertion_sort<T: Ord + Copy>(data: &mut [T]) -> Comparisons {
    let mut cmp = Comparisons::default();
    for i in 1..data.len() {
        let key = data[i];
        let mut left = 0;
        let mut right = i;
        while left < right {
            let mid = left + (right - 1 - left) / 2;
            if cmp.less_eq(&data[mid], &key) {
                left = mid + 1;
            } else {
                right = mid;
            }
        }
        data.copy_within(left..i, left + 1);
        data[left] = key;
    }
    cmp
}

pub struct BinaryInsertionSort;

impl Sorter for BinaryInsertionSort {
    fn name(&self) -> &str {
        "binary_insertion_sort"
    }

    fn sort(&self, data: &mut [i64]) -> Comparisons {
        binary_insertion_sort(data)
    }
}
