use super::{Comparisons, Sorter};

/// Straight insertion sort.
///
/// Every evaluation of `predecessor > key` is counted, including the one that
/// stops the inner loop. The `j > 0` boundary test is free.
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) -> Comparisons {
    let mut cmp = Comparisons::default();
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && cmp.greater(&data[j - 1], &key) {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
    cmp
}

pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &str {
        "insertion_sort"
    }

    fn sort(&self, data: &mut [i64]) -> Comparisons {
        insertion_sort(data)
    }
}
