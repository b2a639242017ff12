use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::core::interfaces::adapters::ErrorMessageMapper;
use crate::core::interfaces::ports::SearchImageUseCase;
use crate::core::models::{SearchOutcome, SearchUiState};
use crate::core::orchestrators::StateStore;
use crate::global_constants::{LOG_TAG_CONTROLLER, MIN_QUERY_LENGTH};

/// State machine for one search session.
///
/// Each submission gets a request id. Submitting again aborts the previous
/// search task, and a result is only applied while its id is still the
/// latest one, so the state always reflects the most recent submission.
pub struct SearchController {
    search_image_use_case: Arc<dyn SearchImageUseCase>,
    error_message_mapper: Arc<dyn ErrorMessageMapper>,
    ui_state: Arc<StateStore<SearchUiState>>,
    latest_request_id: Arc<AtomicU64>,
    in_flight_search: Mutex<Option<JoinHandle<()>>>,
}

impl SearchController {
    pub fn build(
        search_image_use_case: Arc<dyn SearchImageUseCase>,
        error_message_mapper: Arc<dyn ErrorMessageMapper>,
    ) -> Self {
        Self {
            search_image_use_case,
            error_message_mapper,
            ui_state: Arc::new(StateStore::new(SearchUiState::Initial)),
            latest_request_id: Arc::new(AtomicU64::new(0)),
            in_flight_search: Mutex::new(None),
        }
    }

    pub fn current_state(&self) -> SearchUiState {
        self.ui_state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchUiState> {
        self.ui_state.subscribe()
    }

    /// Must be called from within a tokio runtime when the query is long
    /// enough to trigger a search.
    pub fn submit(&self, query: &str) {
        let is_searchable = query.chars().count() >= MIN_QUERY_LENGTH;

        // The id bump and the state write share the store lock, so a finishing
        // search can never land between them.
        let mut request_id = 0;
        self.ui_state.set_with(|| {
            request_id = self.latest_request_id.fetch_add(1, Ordering::SeqCst) + 1;
            Some(if is_searchable {
                SearchUiState::Loading
            } else {
                SearchUiState::Initial
            })
        });
        self.cancel_in_flight_search();

        if !is_searchable {
            log::debug!(
                "{} Query {:?} shorter than {} characters, resetting",
                LOG_TAG_CONTROLLER,
                query,
                MIN_QUERY_LENGTH
            );
            return;
        }

        log::info!(
            "{} Submitting search #{} for {:?}",
            LOG_TAG_CONTROLLER,
            request_id,
            query
        );

        let search_image_use_case = Arc::clone(&self.search_image_use_case);
        let error_message_mapper = Arc::clone(&self.error_message_mapper);
        let ui_state = Arc::clone(&self.ui_state);
        let latest_request_id = Arc::clone(&self.latest_request_id);
        let query = query.to_string();

        let handle = tokio::spawn(async move {
            let outcome = search_image_use_case.search(&query).await;
            let next_state = map_outcome_to_state(outcome, error_message_mapper.as_ref());
            let description = describe_state(&next_state);

            let applied = ui_state.set_with(|| {
                (latest_request_id.load(Ordering::SeqCst) == request_id).then_some(next_state)
            });

            if applied {
                log::info!(
                    "{} Search #{} finished: {}",
                    LOG_TAG_CONTROLLER,
                    request_id,
                    description
                );
            } else {
                log::debug!(
                    "{} Discarding stale result of search #{}",
                    LOG_TAG_CONTROLLER,
                    request_id
                );
            }
        });

        *self.lock_in_flight_search() = Some(handle);
    }

    fn cancel_in_flight_search(&self) {
        if let Some(handle) = self.lock_in_flight_search().take() {
            if !handle.is_finished() {
                log::debug!("{} Aborting in-flight search", LOG_TAG_CONTROLLER);
                handle.abort();
            }
        }
    }

    fn lock_in_flight_search(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.in_flight_search
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_in_flight_search();
    }
}

fn map_outcome_to_state(
    outcome: SearchOutcome,
    error_message_mapper: &dyn ErrorMessageMapper,
) -> SearchUiState {
    match outcome {
        Ok(images) => SearchUiState::Success(images.into_iter().map(|image| image.url).collect()),
        Err(error) => SearchUiState::Error(error_message_mapper.map_error_message(error)),
    }
}

fn describe_state(state: &SearchUiState) -> String {
    match state {
        SearchUiState::Initial => "initial".to_string(),
        SearchUiState::Loading => "loading".to_string(),
        SearchUiState::Error(message) => format!("error ({})", message),
        SearchUiState::Success(images) => format!("{} images", images.len()),
    }
}
