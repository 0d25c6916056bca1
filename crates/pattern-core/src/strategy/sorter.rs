use super::Slot;
use crate::domain::PatternError;

/// A sorting algorithm over any ordered element type.
pub trait SortAlgorithm<T: Ord> {
    fn sort(&self, data: Vec<T>) -> Vec<T>;
}

pub struct Ascending;

impl<T: Ord> SortAlgorithm<T> for Ascending {
    fn sort(&self, mut data: Vec<T>) -> Vec<T> {
        data.sort();
        data
    }
}

pub struct Descending;

impl<T: Ord> SortAlgorithm<T> for Descending {
    fn sort(&self, mut data: Vec<T>) -> Vec<T> {
        data.sort_by(|a, b| b.cmp(a));
        data
    }
}

pub struct Sorter<T: Ord + 'static> {
    algorithm: Slot<dyn SortAlgorithm<T>>,
}

impl<T: Ord + 'static> Sorter<T> {
    pub fn new(algorithm: impl SortAlgorithm<T> + 'static) -> Self {
        Self {
            algorithm: Slot::bound("sort", Box::new(algorithm)),
        }
    }

    pub fn set_strategy(&mut self, algorithm: impl SortAlgorithm<T> + 'static) {
        self.algorithm.set_behavior(Box::new(algorithm));
    }

    pub fn sort(&self, data: Vec<T>) -> Result<Vec<T>, PatternError> {
        Ok(self.algorithm.require()?.sort(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorter_swaps_direction() {
        let mut sorter = Sorter::new(Ascending);
        assert_eq!(sorter.sort(vec![3, 1, 2]).unwrap(), vec![1, 2, 3]);

        sorter.set_strategy(Descending);
        assert_eq!(sorter.sort(vec![3, 1, 2]).unwrap(), vec![3, 2, 1]);
    }

    #[test]
    fn sorter_works_for_strings() {
        let sorter = Sorter::new(Ascending);
        let sorted = sorter.sort(vec!["pram", "cot", "diapers"]).unwrap();
        assert_eq!(sorted, vec!["cot", "diapers", "pram"]);
    }
}
