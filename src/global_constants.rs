pub const APPLICATION_NAME: &str = "Image Search";
pub const APPLICATION_DIR_NAME: &str = "image-search";

pub const MIN_QUERY_LENGTH: usize = 3;
pub const SEARCH_DEBOUNCE_MILLIS: u64 = 1000;

pub const DEFAULT_API_BASE_URL: &str = "https://api.pexels.com/v1/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const API_KEY_ENV_VAR: &str = "PEXELS_API_KEY";

pub const SEARCH_PATH: &str = "search";
pub const SEARCH_ORIENTATION: &str = "landscape";
pub const SEARCH_SIZE: &str = "small";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_SEARCH_CLIENT: &str = "[SEARCH_CLIENT]";
pub const LOG_TAG_USE_CASE: &str = "[USE_CASE]";
pub const LOG_TAG_CONTROLLER: &str = "[CONTROLLER]";
pub const LOG_TAG_DEBOUNCER: &str = "[DEBOUNCER]";

pub const MESSAGE_NO_CONNECTION: &str = "No internet connection";
pub const MESSAGE_SERVER_ERROR: &str =
    "The server could not complete your search. Please try again later.";
pub const MESSAGE_UNKNOWN_ERROR: &str = "Something went wrong. Please try again.";

pub const USER_MESSAGE_WELCOME_TITLE: &str = "Search for images";
pub const USER_MESSAGE_WELCOME_DESCRIPTION: &str = "Type at least {} characters to start searching";
pub const USER_MESSAGE_LOADING: &str = "Searching...";
pub const USER_MESSAGE_NO_RESULTS: &str = "No images found";

pub const COMMAND_SEARCH_NOW: &str = ":search";
pub const COMMAND_QUIT: &str = ":quit";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Image Search                                          ║
║                                                        ║
║  Type a query and pause to search                      ║
║  :search  submit the current query now                 ║
║  :quit    exit                                         ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
