//! Command handlers grouped by resource.

pub(crate) mod audit;
pub(crate) mod health;
pub(crate) mod keys;
pub(crate) mod teams;
pub(crate) mod users;

/// Drop blank segments so `--models ""` sends no models instead of `[""]`.
pub(crate) fn model_list(models: Vec<String>) -> Vec<String> {
    models
        .into_iter()
        .filter(|model| !model.trim().is_empty())
        .collect()
}

/// Update variant of [`model_list`]: a list with no usable model stays unset.
pub(crate) fn model_patch(models: Option<Vec<String>>) -> Option<Vec<String>> {
    models.map(model_list).filter(|models| !models.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_model_segments_are_dropped() {
        assert!(model_list(vec![String::new()]).is_empty());
        assert_eq!(
            model_list(vec!["b".into(), String::new(), "a".into(), "b".into()]),
            vec!["b", "a", "b"]
        );
        assert_eq!(model_patch(Some(vec![" ".into()])), None);
        assert_eq!(model_patch(None), None);
        assert_eq!(model_patch(Some(vec!["gpt-4o".into()])), Some(vec!["gpt-4o".into()]));
    }
}
