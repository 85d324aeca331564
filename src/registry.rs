//! Name based access to every sort in the crate, for the command line and the scenario runner.

use crate::error::{Result, ScenarioError};
use crate::{stable, unstable, Sort};

#[derive(Clone, Debug)]
pub struct RegisteredSort {
    pub name: String,
    pub sort: fn(&mut [i32]),
    /// `O(N²)` on every input kind, these get skipped for large inputs.
    pub quadratic: bool,
}

impl RegisteredSort {
    fn new<S: Sort>(quadratic: bool) -> Self {
        Self {
            name: S::name(),
            sort: S::sort::<i32>,
            quadratic,
        }
    }

    /// The name without its `_stable` or `_unstable` suffix, eg. `bubble`.
    ///
    /// Both std baselines keep their suffix, it is the only thing telling them apart.
    pub fn short_name(&self) -> &str {
        if self.name.starts_with("rust_std") {
            return &self.name;
        }

        self.name
            .strip_suffix("_unstable")
            .or_else(|| self.name.strip_suffix("_stable"))
            .unwrap_or(&self.name)
    }

    /// The input the classroom exercise for this sort was written against.
    pub fn classroom_input(&self) -> Vec<i32> {
        match self.short_name() {
            "insertion" => vec![70, 15, 2, 51, 60],
            "selection" => vec![64, 25, 12, 22, 11],
            _ => vec![1, 4, 2, 3, 5, 8, 6],
        }
    }
}

pub fn all_sorts() -> Vec<RegisteredSort> {
    macro_rules! register {
        ($($sort_impl_path:ident)::+, $quadratic:expr) => {
            RegisteredSort::new::<$($sort_impl_path)::+::SortImpl>($quadratic)
        };
    }

    vec![
        register!(stable::rust_std, false),
        register!(unstable::rust_std, false),
        register!(stable::merge, false),
        register!(unstable::quicksort, false),
        register!(unstable::heapsort, false),
        register!(stable::insertion, true),
        register!(stable::bubble, true),
        register!(unstable::selection, true),
    ]
}

/// Looks a sort up by its full name (`bubble_stable`) or its short name (`bubble`).
pub fn find_sort(name: &str) -> Result<RegisteredSort> {
    let sorts = all_sorts();

    let found = sorts
        .iter()
        .find(|sort| sort.name == name || sort.short_name() == name)
        .cloned();

    found.ok_or_else(|| {
        let known = sorts
            .iter()
            .map(|sort| sort.short_name())
            .collect::<Vec<_>>()
            .join(", ");

        ScenarioError::UnknownSort(name.to_owned(), known)
    })
}
