//! Client-side search over the fetched step list.

use super::step::Step;

/// Case-insensitive substring match against name, framework, input type and
/// output type. Any single field matching is enough; an empty term matches all.
pub fn step_matches(step: &Step, term: &str) -> bool {
    let needle = term.to_lowercase();
    [&step.name, &step.framework, &step.inputs, &step.outputs]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter `steps` by `term`, preserving the original order.
pub fn filter_steps<'a>(steps: &'a [Step], term: &str) -> Vec<&'a Step> {
    steps.iter().filter(|step| step_matches(step, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::sample_steps;

    fn names(steps: &[&Step]) -> Vec<String> {
        steps.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn substring_of_one_name_selects_that_step() {
        let steps = sample_steps();
        assert_eq!(
            names(&filter_steps(&steps, "extract")),
            vec!["Feature Extraction"]
        );
    }

    #[test]
    fn shared_framework_matches_both() {
        let steps = sample_steps();
        assert_eq!(filter_steps(&steps, "prefect").len(), 2);
        assert_eq!(filter_steps(&steps, "PREFECT").len(), 2);
    }

    #[test]
    fn empty_term_matches_everything() {
        let steps = sample_steps();
        assert_eq!(filter_steps(&steps, "").len(), steps.len());
    }

    #[test]
    fn io_types_are_searchable() {
        let steps = sample_steps();
        assert_eq!(names(&filter_steps(&steps, ".CSV")), vec!["Data Preprocessing"]);
        assert_eq!(names(&filter_steps(&steps, "array")), vec!["Feature Extraction"]);
    }

    #[test]
    fn code_and_creator_are_not_searched() {
        let steps = sample_steps();
        assert!(filter_steps(&steps, "blah").is_empty());
        assert!(filter_steps(&steps, "venkat").is_empty());
    }
}
