//! Insertion sort implementations

/// Sort `slice` using insertion sort
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        for j in (0..i).rev() {
            if slice[j + 1] < slice[j] {
                slice.swap(j + 1, j);
            } else {
                break;
            }
        }
    }
}

/// Sort `slice` using binary insertion sort
pub fn binary_insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = slice[0..i]
            .binary_search(&slice[i])
            .unwrap_or_else(|index| index);
        // Keep equal elements in encounter order
        while j < i && slice[j] == slice[i] {
            j += 1;
        }

        for p in (j..i).rev() {
            slice.swap(p, p + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 50;
    const TEST_SIZE: usize = 300;

    #[test]
    fn empty() {
        insertion_sort::<i64>(&mut []);
        binary_insertion_sort::<i64>(&mut []);
    }

    #[test]
    fn random() {
        let mut rng = crate::test::test_rng();

        for run in 0..RUNS {
            let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
            insertion_sort(&mut values);
            assert!(values.is_sorted(), "insertion run {run} was not sorted");

            let mut values = crate::test::random_values(TEST_SIZE, &mut rng);
            binary_insertion_sort(&mut values);
            assert!(values.is_sorted(), "binary insertion run {run} was not sorted");
        }
    }

    #[test]
    fn already_sorted() {
        let mut values: Vec<i64> = (0..TEST_SIZE as i64).collect();
        insertion_sort(&mut values);
        assert!(values.is_sorted());

        binary_insertion_sort(&mut values);
        assert!(values.is_sorted());
    }
}
