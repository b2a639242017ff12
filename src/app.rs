use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinHandle};

use crate::adapters::{EnglishErrorMessageMapper, PexelsImageSearchClient};
use crate::core::interfaces::adapters::ErrorMessageMapper;
use crate::core::interfaces::ports::{SearchImageUseCase, SearchStateRenderer};
use crate::core::models::{SearchUiState, UserSettings};
use crate::core::orchestrators::{QueryDebouncer, SearchController};
use crate::core::use_cases::SearchImagesInteractor;
use crate::global_constants::{COMMAND_QUIT, COMMAND_SEARCH_NOW, LOG_TAG_APP};

const SETTLE_MARGIN: Duration = Duration::from_millis(50);

enum InputEnd {
    Quit,
    Closed,
}

fn log_task_failure(task_name: &str, result: Result<(), JoinError>) {
    if let Err(error) = result {
        if error.is_panic() {
            log::error!("{} The {} task panicked: {}", LOG_TAG_APP, task_name, error);
        }
    }
}

/// One search session: a search field feeding a controller.
pub struct SearchApp {
    controller: Arc<SearchController>,
    debouncer: QueryDebouncer,
    debounce_period: Duration,
}

impl SearchApp {
    pub fn build(settings: &UserSettings) -> anyhow::Result<Self> {
        log::info!("{} Initializing search session", LOG_TAG_APP);

        let image_search_client = Arc::new(PexelsImageSearchClient::build(
            settings.api_base_url.clone(),
            settings.api_key.clone(),
            settings.request_timeout(),
        )?);
        let search_image_use_case = Arc::new(SearchImagesInteractor::new(image_search_client));

        Ok(Self::with_use_case(
            search_image_use_case,
            Arc::new(EnglishErrorMessageMapper),
            settings.debounce_period(),
        ))
    }

    pub fn with_use_case(
        search_image_use_case: Arc<dyn SearchImageUseCase>,
        error_message_mapper: Arc<dyn ErrorMessageMapper>,
        debounce_period: Duration,
    ) -> Self {
        Self {
            controller: Arc::new(SearchController::build(
                search_image_use_case,
                error_message_mapper,
            )),
            debouncer: QueryDebouncer::new(String::new(), debounce_period),
            debounce_period,
        }
    }

    pub fn current_state(&self) -> SearchUiState {
        self.controller.current_state()
    }

    pub fn on_query_changed(&self, text: &str) {
        self.debouncer.push(text);
    }

    pub fn on_search_action(&self) {
        let query = self.debouncer.current();
        log::debug!("{} Search action for {:?}", LOG_TAG_APP, query);
        self.controller.submit(&query);
    }

    pub async fn run<I, R>(self, input: I, renderer: R) -> anyhow::Result<()>
    where
        I: AsyncBufRead + Unpin,
        R: SearchStateRenderer + 'static,
    {
        let renderer_task = self.spawn_renderer(renderer);
        let pipeline_task = self.spawn_query_pipeline();

        let input_result = self.read_input(input).await;
        if let Ok(InputEnd::Closed) = input_result {
            log::info!("{} Input closed, waiting for pending search", LOG_TAG_APP);
            self.wait_until_settled().await;
        }

        pipeline_task.abort();
        log_task_failure("query pipeline", pipeline_task.await);

        drop(self);
        log_task_failure("renderer", renderer_task.await);

        log::info!("{} Session ended", LOG_TAG_APP);
        input_result.map(|_| ())
    }

    async fn read_input<I: AsyncBufRead + Unpin>(&self, input: I) -> anyhow::Result<InputEnd> {
        let mut lines = input.split(b'\n');

        while let Some(raw_line) = lines.next_segment().await? {
            let line = match String::from_utf8(raw_line) {
                Ok(line) => line,
                Err(error) => {
                    log::warn!("{} Skipping line that is not UTF-8: {}", LOG_TAG_APP, error);
                    continue;
                }
            };

            match line.trim_end() {
                COMMAND_QUIT => return Ok(InputEnd::Quit),
                COMMAND_SEARCH_NOW => self.on_search_action(),
                text => self.on_query_changed(text),
            }
        }

        Ok(InputEnd::Closed)
    }

    fn spawn_query_pipeline(&self) -> JoinHandle<()> {
        let controller = Arc::clone(&self.controller);
        let mut committed_queries = Box::pin(self.debouncer.committed_queries());

        tokio::spawn(async move {
            while let Some(query) = committed_queries.next().await {
                controller.submit(&query);
            }
        })
    }

    fn spawn_renderer<R: SearchStateRenderer + 'static>(&self, mut renderer: R) -> JoinHandle<()> {
        let mut receiver = self.controller.subscribe();

        tokio::spawn(async move {
            loop {
                let state = receiver.borrow_and_update().clone();
                if let Err(error) = renderer.render_state(&state) {
                    log::error!("{} Failed to render state: {}", LOG_TAG_APP, error);
                    break;
                }
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    async fn wait_until_settled(&self) {
        tokio::time::sleep(self.debounce_period + SETTLE_MARGIN).await;

        let mut receiver = self.controller.subscribe();
        while *receiver.borrow_and_update() == SearchUiState::Loading {
            if receiver.changed().await.is_err() {
                break;
            }
        }
    }
}
