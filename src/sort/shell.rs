use super::{Comparisons, Sorter};

/// Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
pub fn shell_sort<T: Ord + Copy>(data: &mut [T]) -> Comparisons {
    let mut cmp = Comparisons::default();
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            // `j >= gap` is a bounds guard and is not counted
            while j >= gap && cmp.greater(&data[j - gap], &temp) {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
        gap /= 2;
    }
    cmp
}

pub struct ShellSort;

impl Sorter for ShellSort {
    fn name(&self) -> &str {
        "shell_sort"
    }

    fn sort(&self, data: &mut [i64]) -> Comparisons {
        shell_sort(data)
    }
}
