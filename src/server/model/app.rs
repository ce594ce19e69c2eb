/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub api_client: wows_api::Client,
}
