use std::fmt::Debug;

use vouch_core::ErrorKind;

use crate::messages;
use crate::Validator;

/// Read access to a container's elements.
///
/// The seam that lets collection checks work over `Vec`, slices, and
/// arrays without caring which one the caller holds.
pub trait Elements {
    /// The element type.
    type Item;

    /// The contained elements, in iteration order.
    fn elements(&self) -> &[Self::Item];
}

impl<E> Elements for Vec<E> {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E> Elements for &[E] {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E, const N: usize> Elements for [E; N] {
    type Item = E;

    fn elements(&self) -> &[E] {
        self
    }
}

/// Checks for sequential containers.
pub trait CollectionCheck<E>: Sized {
    /// Ensures that the collection is empty.
    fn is_empty(self) -> Self;

    /// Ensures that the collection is not empty.
    fn is_not_empty(self) -> Self;

    /// Ensures that the collection contains `expected`.
    fn contains(self, expected: &E) -> Self
    where
        E: PartialEq;

    /// Ensures that the collection does not contain `unwanted`.
    fn does_not_contain(self, unwanted: &E) -> Self
    where
        E: PartialEq;

    /// Ensures that the collection contains at least one element of
    /// `expected`.
    fn contains_any(self, expected: &[E]) -> Self
    where
        E: PartialEq;

    /// Ensures that the collection contains every element of `expected`.
    fn contains_all(self, expected: &[E]) -> Self
    where
        E: PartialEq;

    /// Ensures that the collection consists of exactly the elements of
    /// `expected`, irrespective of order but respecting multiplicity.
    fn contains_exactly(self, expected: &[E]) -> Self
    where
        E: PartialEq;

    /// Ensures that no element occurs more than once.
    fn does_not_contain_duplicates(self) -> Self
    where
        E: PartialEq;

    /// Shifts the validation to the number of elements.
    fn len(self) -> Validator<usize>;
}

impl<C, E> CollectionCheck<E> for Validator<C>
where
    C: Elements<Item = E> + Debug,
    E: Debug,
{
    fn is_empty(self) -> Self {
        self.check_property("must be empty", true, |value: &C| {
            value.elements().is_empty()
        })
    }

    fn is_not_empty(self) -> Self {
        self.check_property("may not be empty", false, |value: &C| {
            !value.elements().is_empty()
        })
    }

    fn contains(mut self, expected: &E) -> Self
    where
        E: PartialEq,
    {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| value.elements().contains(expected));
        if !passed {
            let expected_repr = self.map_value(expected);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must contain",
                None,
                &expected_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn does_not_contain(mut self, unwanted: &E) -> Self
    where
        E: PartialEq,
    {
        let passed = self
            .target()
            .as_ref()
            .is_none_or(|value| !value.elements().contains(unwanted));
        if !passed {
            let unwanted_repr = self.map_value(unwanted);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "may not contain",
                None,
                &unwanted_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn contains_any(mut self, expected: &[E]) -> Self
    where
        E: PartialEq,
    {
        let passed = self.target().as_ref().is_none_or(|value| {
            expected
                .iter()
                .any(|element| value.elements().contains(element))
        });
        if !passed {
            let expected_repr = self.map_value(&expected);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must contain any element in",
                None,
                &expected_repr,
            );
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn contains_all(mut self, expected: &[E]) -> Self
    where
        E: PartialEq,
    {
        let missing: Vec<&E> = match self.target().as_ref() {
            Some(value) => expected
                .iter()
                .filter(|element| !value.elements().contains(element))
                .collect(),
            None => Vec::new(),
        };
        let passed = !self.target().is_valid() || missing.is_empty();
        if !passed {
            let expected_repr = self.map_value(&expected);
            let missing_repr = self.map_value(&missing);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must contain all elements in",
                None,
                &expected_repr,
            )
            .with_context("missing", missing_repr);
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn contains_exactly(mut self, expected: &[E]) -> Self
    where
        E: PartialEq,
    {
        let mut missing: Vec<&E> = Vec::new();
        let mut unwanted: Vec<&E> = Vec::new();
        match self.target().as_ref() {
            Some(value) => {
                // Multiset comparison: each expected element consumes one
                // unconsumed actual element equal to it.
                let actual = value.elements();
                let mut matched = vec![false; actual.len()];
                for element in expected {
                    match actual
                        .iter()
                        .enumerate()
                        .position(|(i, candidate)| !matched[i] && candidate == element)
                    {
                        Some(i) => matched[i] = true,
                        None => missing.push(element),
                    }
                }
                unwanted.extend(
                    actual
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| !matched[*i])
                        .map(|(_, element)| element),
                );
            }
            None => {}
        }
        let passed =
            !self.target().is_valid() || (missing.is_empty() && unwanted.is_empty());
        if !passed {
            let expected_repr = self.map_value(&expected);
            let missing_repr = self.map_value(&missing);
            let unwanted_repr = self.map_value(&unwanted);
            let builder = messages::compare(
                self.name(),
                self.value_repr(),
                "must consist of the elements in",
                None,
                &expected_repr,
            )
            .with_context("missing", missing_repr)
            .with_context("unwanted", unwanted_repr);
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn does_not_contain_duplicates(mut self) -> Self
    where
        E: PartialEq,
    {
        let duplicates: Vec<&E> = match self.target().as_ref() {
            Some(value) => {
                let actual = value.elements();
                let mut duplicates: Vec<&E> = Vec::new();
                for (i, element) in actual.iter().enumerate() {
                    if actual[..i].contains(element) && !duplicates.contains(&element) {
                        duplicates.push(element);
                    }
                }
                duplicates
            }
            None => Vec::new(),
        };
        let passed = duplicates.is_empty();
        if !passed {
            let duplicates_repr = self.map_value(&duplicates);
            let builder =
                messages::constraint(self.name(), self.value_repr(), "may not contain duplicates")
                    .with_context("duplicates", duplicates_repr);
            self.add_failure(builder, ErrorKind::InvalidArgument);
        }
        self
    }

    fn len(self) -> Validator<usize> {
        self.derive("len()", |value| value.elements().len())
    }
}
