use crate::RequestState;
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BoxedOperation<Args, T, E> =
    Box<dyn Fn(Args) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send>> + Send + Sync>;
type Classifier<E> = Box<dyn Fn(&E) -> String + Send + Sync>;
type SuccessHook<T> = Box<dyn Fn(&T) + Send + Sync>;
type ErrorHook<E> = Box<dyn Fn(&str, &E) + Send + Sync>;

/// Outcome notification surface (toasts, snackbars, status lines).
///
/// Dispatch is fire-and-forget: implementations must not block, and nothing
/// they do can change the result returned by [`RequestExecutor::execute`].
pub trait Notify: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default notifier that drops every message.
pub struct NoopNotify;

impl Notify for NoopNotify {
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
}

/// Wraps a fallible async operation with an observable
/// idle/loading/success/failed lifecycle.
///
/// The executor runs the wrapped operation exactly once per [`execute`]
/// call. It never retries, never queues, and never cancels: overlapping
/// calls race and whichever resolves last writes the final state. Errors are
/// recorded as a display string for rendering and re-raised unchanged so a
/// caller doing an optimistic update can roll it back in its own error arm.
///
/// [`execute`]: RequestExecutor::execute
pub struct RequestExecutor<Args, T: Clone, E> {
    operation: BoxedOperation<Args, T, E>,
    state: Mutable<RequestState<T>>,
    classifier: Classifier<E>,
    notifier: Arc<dyn Notify>,
    on_success: Option<SuccessHook<T>>,
    on_error: Option<ErrorHook<E>>,
    show_success_toast: bool,
    show_error_toast: bool,
    success_message: String,
    initial_data: Option<T>,
}

impl<Args, T, E> RequestExecutor<Args, T, E>
where
    T: Clone + Send + Sync + 'static,
    E: ToString,
{
    /// Creates an executor around `operation`, classifying errors with
    /// `ToString`. Use [`with_classifier`] to plug in a richer mapping.
    ///
    /// [`with_classifier`]: RequestExecutor::with_classifier
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(Args) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        RequestExecutor {
            operation: Box::new(move |args| Box::pin(operation(args))),
            state: Mutable::new(RequestState::Idle(None)),
            classifier: Box::new(|error| error.to_string()),
            notifier: Arc::new(NoopNotify),
            on_success: None,
            on_error: None,
            show_success_toast: false,
            show_error_toast: true,
            success_message: "Operation successful".to_string(),
            initial_data: None,
        }
    }
}

impl<Args, T, E> RequestExecutor<Args, T, E>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn with_classifier<C>(mut self, classifier: C) -> Self
    where
        C: Fn(&E) -> String + Send + Sync + 'static,
    {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notify>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn on_success<F>(mut self, hook: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_success = Some(Box::new(hook));
        self
    }

    /// The hook receives the classified display string and the raw error.
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &E) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub fn show_success_toast(mut self, show: bool) -> Self {
        self.show_success_toast = show;
        self
    }

    pub fn show_error_toast(mut self, show: bool) -> Self {
        self.show_error_toast = show;
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Seeds the idle state (and every [`reset`]) with `value`.
    ///
    /// [`reset`]: RequestExecutor::reset
    pub fn initial_data(mut self, value: T) -> Self {
        self.initial_data = Some(value.clone());
        self.state.set(RequestState::Idle(Some(value)));
        self
    }

    /// Runs the wrapped operation once.
    ///
    /// Transitions to `Loading` (retaining the previous value, clearing any
    /// error), awaits the operation, then settles to `Success` or `Failed`.
    /// On failure the previous value is kept and the raw error is returned
    /// to the caller.
    pub async fn execute(&self, args: Args) -> Result<T, E> {
        let retained = self.state.get_cloned().into_value();
        self.state.set(RequestState::Loading(retained));

        let result = (self.operation)(args).await;
        match &result {
            Ok(value) => {
                self.state.set(RequestState::Success(value.clone()));
                if self.show_success_toast {
                    self.notifier.success(&self.success_message);
                }
                if let Some(hook) = &self.on_success {
                    hook(value);
                }
            }
            Err(error) => {
                let message = (self.classifier)(error);
                let retained = self.state.get_cloned().into_value();
                self.state
                    .set(RequestState::failed(message.clone(), retained));
                if self.show_error_toast {
                    self.notifier.error(&message);
                }
                if let Some(hook) = &self.on_error {
                    hook(&message, error);
                }
            }
        }
        result
    }

    /// Returns to `Idle` with the configured initial data.
    ///
    /// In-flight executions are not cancelled or fenced; a resolution that
    /// arrives later still overwrites the reset state.
    pub fn reset(&self) {
        self.state
            .set(RequestState::Idle(self.initial_data.clone()));
    }

    pub fn state(&self) -> RequestState<T> {
        self.state.get_cloned()
    }

    pub fn data(&self) -> Option<T> {
        self.state.get_cloned().into_value()
    }

    pub fn error_message(&self) -> Option<String> {
        self.state
            .get_cloned()
            .error_message()
            .map(str::to_string)
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock_ref().is_loading()
    }

    pub fn to_signal(&self) -> MutableSignalCloned<RequestState<T>> {
        self.state.signal_cloned()
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<RequestState<T>>> {
        self.state.signal_cloned().to_stream()
    }
}
