use crate::errors::CoreError;

/// State of a per-view store.
///
/// A view starts in `Loading`, and its single fetch moves it to either
/// `Ready` (contents replaced wholesale) or `Failed`. Neither non-ready
/// state has records, but presentation shows different messages for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreState<T> {
    #[default]
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> StoreState<T> {
    /// Contents, if the fetch succeeded.
    pub fn ready(&self) -> Option<&T> {
        match self {
            StoreState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, StoreState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, StoreState::Ready(_))
    }

    /// Failure message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            StoreState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> StoreState<Vec<T>> {
    /// Records in the store; empty unless `Ready`.
    pub fn records(&self) -> &[T] {
        match self {
            StoreState::Ready(records) => records,
            _ => &[],
        }
    }
}

impl<T> From<Result<T, CoreError>> for StoreState<T> {
    fn from(result: Result<T, CoreError>) -> Self {
        match result {
            Ok(value) => StoreState::Ready(value),
            Err(e) => StoreState::Failed(e.to_string()),
        }
    }
}
