/// Lifecycle of a single asynchronous request.
///
/// A request starts in `Idle` (optionally pre-seeded with initial data),
/// moves to `Loading` when executed, and settles in either `Success` or
/// `Failed`. `Loading` and `Failed` retain the last known value so a screen
/// can keep showing stale data while a refresh is in flight or after it
/// broke.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RequestState<T: Clone> {
    Idle(Option<T>),
    Loading(Option<T>),
    Success(T),
    Failed { message: String, value: Option<T> },
}

impl<T: Clone> RequestState<T> {
    pub fn idle(value: Option<T>) -> Self {
        RequestState::Idle(value)
    }

    pub fn loading(value: Option<T>) -> Self {
        RequestState::Loading(value)
    }

    pub fn success(value: T) -> Self {
        RequestState::Success(value)
    }

    pub fn failed(message: impl Into<String>, value: Option<T>) -> Self {
        RequestState::Failed {
            message: message.into(),
            value,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestState::Success(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed { .. })
    }

    /// A settled request has either succeeded or failed.
    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Success(_) | RequestState::Failed { .. })
    }

    pub fn value_ref(&self) -> Option<&T> {
        match self {
            RequestState::Idle(Some(value)) => Some(value),
            RequestState::Loading(Some(value)) => Some(value),
            RequestState::Success(value) => Some(value),
            RequestState::Failed {
                value: Some(value), ..
            } => Some(value),
            _ => None,
        }
    }

    pub fn cloned_value(&self) -> Option<T> {
        self.value_ref().cloned()
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            RequestState::Idle(value) => value,
            RequestState::Loading(value) => value,
            RequestState::Success(value) => Some(value),
            RequestState::Failed { value, .. } => value,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle(None)
    }
}

impl<T: Clone> From<&RequestState<T>> for Option<T> {
    fn from(state: &RequestState<T>) -> Self {
        state.cloned_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle() {
        let idle: RequestState<i32> = RequestState::default();
        assert!(idle.is_idle());
        assert!(!idle.is_loading());
        assert!(!idle.is_settled());
        assert!(idle.value_ref().is_none());
        assert!(idle.error_message().is_none());

        let seeded = RequestState::idle(Some(3));
        assert!(seeded.is_idle());
        assert_eq!(seeded.value_ref(), Some(&3));
        assert_eq!(seeded.into_value(), Some(3));
    }

    #[test]
    fn test_loading() {
        let loading = RequestState::loading(Some(7));
        assert!(loading.is_loading());
        assert!(!loading.is_settled());
        assert_eq!(loading.value_ref(), Some(&7));
        assert_eq!(loading.cloned_value(), Some(7));
        assert!(loading.error_message().is_none());

        let loading = RequestState::loading(None::<i32>);
        assert!(loading.value_ref().is_none());
        assert_eq!(loading.into_value(), None);
    }

    #[test]
    fn test_success() {
        let success = RequestState::success(8);
        assert!(success.is_success());
        assert!(success.is_settled());
        assert!(!success.is_failed());
        assert_eq!(success.value_ref(), Some(&8));
        assert_eq!(success.into_value(), Some(8));
    }

    #[test]
    fn test_failed() {
        let failed = RequestState::failed("Connection failed", Some(50));
        assert!(failed.is_failed());
        assert!(failed.is_settled());
        assert!(!failed.is_success());
        assert_eq!(failed.error_message(), Some("Connection failed"));
        assert_eq!(failed.value_ref(), Some(&50));
        assert_eq!(failed.into_value(), Some(50));

        let failed = RequestState::failed("gone", None::<i32>);
        assert!(failed.value_ref().is_none());
    }

    #[test]
    fn test_option_conversion() {
        let success = RequestState::success("data".to_string());
        let value: Option<String> = (&success).into();
        assert_eq!(value, Some("data".to_string()));

        let idle: RequestState<String> = RequestState::default();
        let value: Option<String> = (&idle).into();
        assert_eq!(value, None);
    }
}
